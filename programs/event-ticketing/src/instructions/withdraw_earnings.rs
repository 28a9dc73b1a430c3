use anchor_lang::prelude::*;
use crate::state::Event;
use crate::errors::TicketingError;
use crate::constants::*;
use crate::utils::reentrancy::{acquire_lock, release_lock, ReentrancyGuard};
use crate::utils::safe_add;

#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct WithdrawEarnings<'info> {
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
}

/// Pays the organizer the lamports for tickets sold since the last
/// withdrawal. The event account never drops below rent exemption.
pub fn withdraw_earnings(ctx: Context<WithdrawEarnings>, event_id: u64) -> Result<()> {
    acquire_lock(&mut ctx.accounts.reentrancy_guard)?;

    let organizer = ctx.accounts.organizer.key();
    let event_info = ctx.accounts.event.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(event_info.data_len());
    let event_lamports = event_info.lamports();
    let amount = ctx
        .accounts
        .event
        .settle_native_withdrawal(&organizer, event_lamports, rent_floor)?;

    // The event account is program owned, so lamports move directly
    **event_info.try_borrow_mut_lamports()? = event_lamports
        .checked_sub(amount)
        .ok_or(TicketingError::MathOverflow)?;
    let organizer_info = ctx.accounts.organizer.to_account_info();
    let organizer_lamports = organizer_info.lamports();
    **organizer_info.try_borrow_mut_lamports()? = safe_add(organizer_lamports, amount)?;

    emit!(EarningsWithdrawn {
        event: ctx.accounts.event.key(),
        event_id,
        organizer,
        amount,
        payment_mint: None,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Withdrew {} lamports from event {}", amount, event_id);

    release_lock(&mut ctx.accounts.reentrancy_guard)?;

    Ok(())
}

#[event]
pub struct EarningsWithdrawn {
    pub event: Pubkey,
    pub event_id: u64,
    pub organizer: Pubkey,
    pub amount: u64,
    pub payment_mint: Option<Pubkey>,
    pub timestamp: i64,
}
