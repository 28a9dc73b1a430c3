use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::{Ledger, Event, CreateEventParams, PaymentMethod};
use crate::utils::reentrancy::ReentrancyGuard;
use crate::instructions::create_event::EventCreated;
use crate::constants::*;

#[derive(Accounts)]
pub struct CreateTokenEvent<'info> {
    #[account(mut)]
    pub organizer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        payer = organizer,
        seeds = [
            EVENT_SEED,
            ledger.total_events.to_le_bytes().as_ref()
        ],
        bump,
        space = 8 + Event::SIZE,
    )]
    pub event: Account<'info, Event>,

    #[account(
        init,
        payer = organizer,
        seeds = [
            REENTRANCY_SEED,
            event.key().as_ref()
        ],
        bump,
        space = 8 + ReentrancyGuard::INIT_SPACE,
    )]
    pub reentrancy_guard: Account<'info, ReentrancyGuard>,

    pub payment_mint: InterfaceAccount<'info, Mint>,

    /// Holds token proceeds until the organizer withdraws them
    #[account(
        init,
        payer = organizer,
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

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Registers an event paid for in an SPL token. Returns the new event id.
pub fn create_token_event(
    ctx: Context<CreateTokenEvent>,
    params: CreateEventParams,
) -> Result<u64> {
    let current_time = Clock::get()?.unix_timestamp;
    let organizer = ctx.accounts.organizer.key();
    let mint = ctx.accounts.payment_mint.key();

    let event_id = ctx.accounts.ledger.allocate_event_id()?;
    let event = Event::open(
        event_id,
        organizer,
        &params,
        PaymentMethod::Token { mint },
        current_time,
        ctx.bumps.event,
    )?;
    ctx.accounts.event.set_inner(event);

    // Initialize reentrancy guard
    let reentrancy_guard = &mut ctx.accounts.reentrancy_guard;
    reentrancy_guard.is_locked = false;
    reentrancy_guard.bump = ctx.bumps.reentrancy_guard;

    emit!(EventCreated {
        event: ctx.accounts.event.key(),
        event_id,
        name: params.name.clone(),
        ticket_price: params.ticket_price,
        max_ticket_count: params.max_ticket_count,
        organizer,
        payment_mint: Some(mint),
        timestamp: current_time,
    });

    msg!(
        "Event {} '{}' created, paid in {} with capacity for {} tickets",
        event_id,
        params.name,
        mint,
        params.max_ticket_count
    );

    Ok(event_id)
}
