use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};
use crate::state::{Ledger, Event, Ticket, TreeConfig};
use crate::errors::TicketingError;
use crate::constants::*;
use crate::instructions::purchase_ticket::TicketPurchased;
use crate::utils::merkle::{
    create_ticket_metadata, get_asset_id, mint_ticket_cnft, TicketMintAccounts,
};
use crate::utils::reentrancy::{acquire_lock, release_lock, ReentrancyGuard};
use crate::utils::validation::validate_metadata_uri;

#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct PurchaseTicketWithToken<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        has_one = merkle_tree @ TicketingError::InvalidTreeAccount,
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [
            EVENT_SEED,
            event_id.to_le_bytes().as_ref()
        ],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    #[account(
        init,
        payer = buyer,
        seeds = [
            TICKET_SEED,
            ledger.total_tickets.to_le_bytes().as_ref()
        ],
        bump,
        space = 8 + Ticket::SIZE,
    )]
    pub ticket: Account<'info, Ticket>,

    #[account(
        mut,
        seeds = [
            REENTRANCY_SEED,
            event.key().as_ref()
        ],
        bump = reentrancy_guard.bump,
    )]
    pub reentrancy_guard: Account<'info, ReentrancyGuard>,

    pub payment_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = payment_mint,
        token::authority = buyer,
        token::token_program = token_program,
    )]
    pub buyer_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [
            VAULT_SEED,
            event.key().as_ref()
        ],
        bump,
        token::mint = payment_mint,
        token::authority = event,
        token::token_program = token_program,
    )]
    pub event_vault: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Bubblegum tree config PDA
    #[account(
        mut,
        seeds = [merkle_tree.key().as_ref()],
        bump,
        seeds::program = mpl_bubblegum::ID,
    )]
    pub tree_authority: UncheckedAccount<'info>,

    /// CHECK: Matched against the ledger via has_one
    #[account(mut)]
    pub merkle_tree: UncheckedAccount<'info>,

    /// CHECK: Metaplex Bubblegum program
    #[account(address = mpl_bubblegum::ID)]
    pub bubblegum_program: UncheckedAccount<'info>,

    /// CHECK: SPL Noop program
    #[account(address = spl_noop::ID)]
    pub log_wrapper: UncheckedAccount<'info>,

    /// CHECK: SPL Account Compression program
    #[account(address = spl_account_compression::ID)]
    pub compression_program: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Sells one ticket for the event's SPL token, pulling the price from the
/// buyer's token account into the event vault. Returns the new ticket id.
pub fn purchase_ticket_with_token(
    ctx: Context<PurchaseTicketWithToken>,
    _event_id: u64,
    metadata_uri: String,
) -> Result<u64> {
    acquire_lock(&mut ctx.accounts.reentrancy_guard)?;

    let current_time = Clock::get()?.unix_timestamp;
    validate_metadata_uri(&metadata_uri)?;

    let mint = ctx.accounts.payment_mint.key();
    let balance = ctx.accounts.buyer_token_account.amount;
    let price = ctx.accounts.event.check_token_payment(&mint, balance)?;

    // Bookkeeping happens before any funds or leaves move
    let tree_capacity = TreeConfig::optimal().capacity();
    let ticket_id = ctx
        .accounts
        .ledger
        .record_purchase(&mut ctx.accounts.event, tree_capacity)?;

    let buyer_key = ctx.accounts.buyer.key();
    let event_key = ctx.accounts.event.key();
    let event_id = ctx.accounts.event.event_id;
    let asset_id = get_asset_id(&ctx.accounts.merkle_tree.key(), ticket_id);

    ctx.accounts.ticket.set_inner(Ticket {
        ticket_id,
        event_id,
        event: event_key,
        buyer: buyer_key,
        asset_id,
        purchased_at: current_time,
        bump: ctx.bumps.ticket,
    });

    transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.buyer_token_account.to_account_info(),
                mint: ctx.accounts.payment_mint.to_account_info(),
                to: ctx.accounts.event_vault.to_account_info(),
                authority: ctx.accounts.buyer.to_account_info(),
            },
        ),
        price,
        ctx.accounts.payment_mint.decimals,
    )?;

    let metadata = create_ticket_metadata(&ctx.accounts.event, ticket_id, &metadata_uri);
    mint_ticket_cnft(
        &TicketMintAccounts {
            bubblegum_program: &ctx.accounts.bubblegum_program.to_account_info(),
            tree_authority: &ctx.accounts.tree_authority.to_account_info(),
            merkle_tree: &ctx.accounts.merkle_tree.to_account_info(),
            ledger: &ctx.accounts.ledger.to_account_info(),
            buyer: &ctx.accounts.buyer.to_account_info(),
            log_wrapper: &ctx.accounts.log_wrapper.to_account_info(),
            compression_program: &ctx.accounts.compression_program.to_account_info(),
            system_program: &ctx.accounts.system_program.to_account_info(),
        },
        metadata,
        ctx.accounts.ledger.bump,
    )?;

    emit!(TicketPurchased {
        buyer: buyer_key,
        event: event_key,
        event_id,
        ticket_id,
        asset_id,
        price,
        payment_mint: Some(mint),
        timestamp: current_time,
    });

    msg!("Ticket {} sold for event {} in {}", ticket_id, event_id, mint);

    release_lock(&mut ctx.accounts.reentrancy_guard)?;

    Ok(ticket_id)
}
