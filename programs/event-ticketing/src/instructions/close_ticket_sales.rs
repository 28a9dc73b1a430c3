use anchor_lang::prelude::*;
use crate::state::Event;
use crate::constants::*;

#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct CloseTicketSales<'info> {
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
}

pub fn close_ticket_sales(ctx: Context<CloseTicketSales>, event_id: u64) -> Result<()> {
    let organizer = ctx.accounts.organizer.key();
    let event = &mut ctx.accounts.event;
    event.close_sales(&organizer)?;

    emit!(TicketSalesClosed {
        event: event.key(),
        event_id,
        organizer,
        tickets_sold: event.tickets_sold,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Ticket sales closed for event {}", event_id);

    Ok(())
}

#[event]
pub struct TicketSalesClosed {
    pub event: Pubkey,
    pub event_id: u64,
    pub organizer: Pubkey,
    pub tickets_sold: u32,
    pub timestamp: i64,
}
