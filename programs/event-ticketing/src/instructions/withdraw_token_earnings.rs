use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};
use crate::state::Event;
use crate::constants::*;
use crate::instructions::withdraw_earnings::EarningsWithdrawn;
use crate::utils::reentrancy::{acquire_lock, release_lock, ReentrancyGuard};

#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct WithdrawTokenEarnings<'info> {
    #[account(mut)]
    pub organizer: Signer<'info>,

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

    #[account(
        mut,
        token::mint = payment_mint,
        token::authority = organizer,
        token::token_program = token_program,
    )]
    pub organizer_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Sends the organizer the tokens for tickets sold since the last
/// withdrawal, signed by the event PDA that owns the vault.
pub fn withdraw_token_earnings(
    ctx: Context<WithdrawTokenEarnings>,
    event_id: u64,
) -> Result<()> {
    acquire_lock(&mut ctx.accounts.reentrancy_guard)?;

    let organizer = ctx.accounts.organizer.key();
    let mint = ctx.accounts.payment_mint.key();
    let vault_balance = ctx.accounts.event_vault.amount;
    let event = &mut ctx.accounts.event;
    let amount = event.settle_token_withdrawal(&organizer, &mint, vault_balance)?;

    let id_bytes = event.event_id.to_le_bytes();
    let bump = [event.bump];
    let event_seeds: &[&[u8]] = &[EVENT_SEED, &id_bytes, &bump];
    let signer_seeds = &[event_seeds];

    transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.event_vault.to_account_info(),
                mint: ctx.accounts.payment_mint.to_account_info(),
                to: ctx.accounts.organizer_token_account.to_account_info(),
                authority: ctx.accounts.event.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
        ctx.accounts.payment_mint.decimals,
    )?;

    emit!(EarningsWithdrawn {
        event: ctx.accounts.event.key(),
        event_id,
        organizer,
        amount,
        payment_mint: Some(mint),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Withdrew {} tokens of {} from event {}", amount, mint, event_id);

    release_lock(&mut ctx.accounts.reentrancy_guard)?;

    Ok(())
}
