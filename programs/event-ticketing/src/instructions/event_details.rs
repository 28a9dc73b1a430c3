use anchor_lang::prelude::*;
use crate::state::{Event, EventDetails, Ticket};
use crate::errors::TicketingError;
use crate::constants::*;

#[derive(Accounts)]
#[instruction(ticket_id: u64)]
pub struct GetTicketEventDetails<'info> {
    #[account(
        seeds = [
            TICKET_SEED,
            ticket_id.to_le_bytes().as_ref()
        ],
        bump = ticket.bump,
    )]
    pub ticket: Account<'info, Ticket>,

    pub event: Account<'info, Event>,
}

#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct GetEventDetails<'info> {
    #[account(
        seeds = [
            EVENT_SEED,
            event_id.to_le_bytes().as_ref()
        ],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,
}

/// Resolves a ticket to the event it was sold under. Both the stored event
/// address and id must match, so a ticket never reports another event.
pub fn resolve_ticket_event(
    ticket: &Ticket,
    event_key: &Pubkey,
    event: &Event,
) -> Result<EventDetails> {
    require_keys_eq!(ticket.event, *event_key, TicketingError::TicketEventMismatch);
    require!(
        ticket.event_id == event.event_id,
        TicketingError::TicketEventMismatch
    );
    Ok(event.details())
}

pub fn get_ticket_event_details(
    ctx: Context<GetTicketEventDetails>,
    _ticket_id: u64,
) -> Result<EventDetails> {
    resolve_ticket_event(
        &ctx.accounts.ticket,
        &ctx.accounts.event.key(),
        &ctx.accounts.event,
    )
}

pub fn get_event_details(ctx: Context<GetEventDetails>, _event_id: u64) -> Result<EventDetails> {
    Ok(ctx.accounts.event.details())
}
