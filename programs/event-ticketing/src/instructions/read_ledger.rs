use anchor_lang::prelude::*;
use crate::state::Ledger;
use crate::constants::*;

#[derive(Accounts)]
pub struct ReadLedger<'info> {
    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, Ledger>,
}

pub fn get_total_event_count(ctx: Context<ReadLedger>) -> Result<u64> {
    Ok(ctx.accounts.ledger.total_events)
}

pub fn get_total_ticket_count(ctx: Context<ReadLedger>) -> Result<u64> {
    Ok(ctx.accounts.ledger.total_tickets)
}
