use anchor_lang::prelude::*;

/// One-way link from a ticket id to the event it was sold under. Ownership
/// of the ticket itself lives in the compressed NFT leaf.
#[account]
#[derive(Debug)]
pub struct Ticket {
    pub ticket_id: u64,             // 8 bytes - Ledger-assigned id
    pub event_id: u64,              // 8 bytes - Parent event id
    pub event: Pubkey,              // 32 bytes - Parent event PDA
    pub buyer: Pubkey,              // 32 bytes - Original purchaser
    pub asset_id: Pubkey,           // 32 bytes - Bubblegum cNFT asset id
    pub purchased_at: i64,          // 8 bytes - Unix timestamp
    pub bump: u8,                   // 1 byte - PDA bump
}

impl Ticket {
    pub const SIZE: usize = 8 + 8 + 32 + 32 + 32 + 8 + 1;
}
