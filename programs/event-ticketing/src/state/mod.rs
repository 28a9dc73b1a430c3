use anchor_lang::prelude::*;
pub mod ledger;
pub mod event;
pub mod ticket;
pub mod tree_config;

#[cfg(test)]
mod tests;

pub use ledger::*;
pub use event::*;
pub use ticket::*;
pub use tree_config::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct CreateEventParams {
    pub name: String,
    pub ticket_price: u64,
    pub max_ticket_count: u32,
}

/// Read-only view of an event returned by the accessor instructions.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct EventDetails {
    pub event_id: u64,
    pub name: String,
    pub ticket_price: u64,
    pub max_ticket_count: u32,
    pub tickets_sold: u32,
    pub organizer: Pubkey,
    pub sales_active: bool,
    pub payment_mint: Option<Pubkey>,
}
