use anchor_lang::prelude::*;
use crate::errors::TicketingError;
use crate::state::Event;
use crate::utils::safe_add;

/// Program-wide bookkeeping: the two id allocators and the ticket tree.
#[account]
#[derive(Default, Debug)]
pub struct Ledger {
    pub authority: Pubkey,          // 32 bytes
    pub merkle_tree: Pubkey,        // 32 bytes - cNFT tree holding every ticket
    pub total_events: u64,          // 8 bytes - next event id
    pub total_tickets: u64,         // 8 bytes - next ticket id
    pub bump: u8,                   // 1 byte
}

impl Ledger {
    pub const SIZE: usize = 32 + 32 + 8 + 8 + 1;

    /// Hands out the current event counter and advances it.
    pub fn allocate_event_id(&mut self) -> Result<u64> {
        let id = self.total_events;
        self.total_events = safe_add(self.total_events, 1)?;
        Ok(id)
    }

    /// Hands out the current ticket counter and advances it. The ticket id
    /// doubles as the leaf nonce in the tree, so allocation stops once the
    /// tree is full.
    pub fn allocate_ticket_id(&mut self, tree_capacity: u32) -> Result<u64> {
        require!(
            self.total_tickets < tree_capacity as u64,
            TicketingError::TicketTreeFull
        );
        let id = self.total_tickets;
        self.total_tickets = safe_add(self.total_tickets, 1)?;
        Ok(id)
    }

    /// Records one sale against `event` and hands out its ticket id. The
    /// buyer's payment must already have been checked against the event.
    pub fn record_purchase(&mut self, event: &mut Event, tree_capacity: u32) -> Result<u64> {
        event.ensure_can_sell()?;
        let ticket_id = self.allocate_ticket_id(tree_capacity)?;
        event.record_sale()?;
        Ok(ticket_id)
    }
}
