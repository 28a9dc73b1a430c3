use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{CreateEventParams, EventDetails};

declare_id!("GkNXBWF2yL6VNdnNceyaVF4eYyxsrN3CRSXzzLd7ix1h");

#[program]
pub mod event_ticketing {
    use super::*;

    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        instructions::initialize_ledger::initialize_ledger(ctx)
    }

    pub fn create_event(
        ctx: Context<CreateEvent>,
        params: CreateEventParams,
    ) -> Result<u64> {
        instructions::create_event::create_event(ctx, params)
    }

    pub fn create_token_event(
        ctx: Context<CreateTokenEvent>,
        params: CreateEventParams,
    ) -> Result<u64> {
        instructions::create_token_event::create_token_event(ctx, params)
    }

    pub fn purchase_ticket(
        ctx: Context<PurchaseTicket>,
        event_id: u64,
        amount: u64,
        metadata_uri: String,
    ) -> Result<u64> {
        instructions::purchase_ticket::purchase_ticket(ctx, event_id, amount, metadata_uri)
    }

    pub fn purchase_ticket_with_token(
        ctx: Context<PurchaseTicketWithToken>,
        event_id: u64,
        metadata_uri: String,
    ) -> Result<u64> {
        instructions::purchase_ticket_with_token::purchase_ticket_with_token(
            ctx,
            event_id,
            metadata_uri,
        )
    }

    pub fn close_ticket_sales(ctx: Context<CloseTicketSales>, event_id: u64) -> Result<()> {
        instructions::close_ticket_sales::close_ticket_sales(ctx, event_id)
    }

    pub fn withdraw_earnings(ctx: Context<WithdrawEarnings>, event_id: u64) -> Result<()> {
        instructions::withdraw_earnings::withdraw_earnings(ctx, event_id)
    }

    pub fn withdraw_token_earnings(
        ctx: Context<WithdrawTokenEarnings>,
        event_id: u64,
    ) -> Result<()> {
        instructions::withdraw_token_earnings::withdraw_token_earnings(ctx, event_id)
    }

    pub fn get_total_event_count(ctx: Context<ReadLedger>) -> Result<u64> {
        instructions::read_ledger::get_total_event_count(ctx)
    }

    pub fn get_total_ticket_count(ctx: Context<ReadLedger>) -> Result<u64> {
        instructions::read_ledger::get_total_ticket_count(ctx)
    }

    pub fn get_ticket_event_details(
        ctx: Context<GetTicketEventDetails>,
        ticket_id: u64,
    ) -> Result<EventDetails> {
        instructions::event_details::get_ticket_event_details(ctx, ticket_id)
    }

    pub fn get_event_details(
        ctx: Context<GetEventDetails>,
        event_id: u64,
    ) -> Result<EventDetails> {
        instructions::event_details::get_event_details(ctx, event_id)
    }
}


#[cfg(test)]
mod tests;
