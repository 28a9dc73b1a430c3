use anchor_lang::prelude::*;
use mpl_bubblegum::instructions::CreateTreeConfigCpiBuilder;
use crate::state::{Ledger, TreeConfig};
use crate::errors::TicketingError;
use crate::constants::*;

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + Ledger::SIZE,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: Allocated by the client and owned by account compression;
    /// Bubblegum initializes its contents
    #[account(
        mut,
        owner = spl_account_compression::ID,
        constraint = merkle_tree.data_len() == TreeConfig::optimal().account_size()
            @ TicketingError::InvalidTreeAccount,
    )]
    pub merkle_tree: UncheckedAccount<'info>,

    /// CHECK: Bubblegum tree config PDA, created by the CPI
    #[account(
        mut,
        seeds = [merkle_tree.key().as_ref()],
        bump,
        seeds::program = mpl_bubblegum::ID,
    )]
    pub tree_authority: UncheckedAccount<'info>,

    /// CHECK: Metaplex Bubblegum program
    #[account(address = mpl_bubblegum::ID)]
    pub bubblegum_program: UncheckedAccount<'info>,

    /// CHECK: SPL Noop program
    #[account(address = spl_noop::ID)]
    pub log_wrapper: UncheckedAccount<'info>,

    /// CHECK: SPL Account Compression program
    #[account(address = spl_account_compression::ID)]
    pub compression_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
    let tree = TreeConfig::optimal();
    tree.validate()?;

    let ledger_bump = ctx.bumps.ledger;
    let ledger = &mut ctx.accounts.ledger;
    ledger.authority = ctx.accounts.authority.key();
    ledger.merkle_tree = ctx.accounts.merkle_tree.key();
    ledger.total_events = 0;
    ledger.total_tickets = 0;
    ledger.bump = ledger_bump;

    // The ledger PDA owns the private tree, so only this program can mint
    // into it and leaf nonces track ticket ids.
    let bump = [ledger_bump];
    let ledger_seeds: &[&[u8]] = &[LEDGER_SEED, &bump];

    let bubblegum_program = ctx.accounts.bubblegum_program.to_account_info();
    let tree_authority = ctx.accounts.tree_authority.to_account_info();
    let merkle_tree = ctx.accounts.merkle_tree.to_account_info();
    let payer = ctx.accounts.authority.to_account_info();
    let tree_creator = ctx.accounts.ledger.to_account_info();
    let log_wrapper = ctx.accounts.log_wrapper.to_account_info();
    let compression_program = ctx.accounts.compression_program.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();

    CreateTreeConfigCpiBuilder::new(&bubblegum_program)
        .tree_config(&tree_authority)
        .merkle_tree(&merkle_tree)
        .payer(&payer)
        .tree_creator(&tree_creator)
        .log_wrapper(&log_wrapper)
        .compression_program(&compression_program)
        .system_program(&system_program)
        .max_depth(tree.max_depth as u32)
        .max_buffer_size(tree.max_buffer_size as u32)
        .public(false)
        .invoke_signed(&[ledger_seeds])?;

    emit!(LedgerInitialized {
        authority: ctx.accounts.authority.key(),
        merkle_tree: ctx.accounts.merkle_tree.key(),
        ticket_capacity: tree.capacity(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Ledger initialized with room for {} tickets", tree.capacity());

    Ok(())
}

#[event]
pub struct LedgerInitialized {
    pub authority: Pubkey,
    pub merkle_tree: Pubkey,
    pub ticket_capacity: u32,
    pub timestamp: i64,
}
