// String limits
pub const MAX_EVENT_NAME: usize = 32;
pub const MAX_URI_LENGTH: usize = 200;       // Bubblegum metadata uri cap
pub const MAX_NFT_NAME: usize = 32;          // Bubblegum metadata name cap
pub const TICKET_SYMBOL: &str = "TKT";

// Seeds
pub const LEDGER_SEED: &[u8] = b"ledger";
pub const EVENT_SEED: &[u8] = b"event";
pub const TICKET_SEED: &[u8] = b"ticket";
pub const VAULT_SEED: &[u8] = b"vault";
pub const REENTRANCY_SEED: &[u8] = b"reentrancy";

// Compressed NFT tree configuration
pub const TREE_MAX_DEPTH: u8 = 14;           // 16,384 tickets
pub const TREE_MAX_BUFFER_SIZE: u16 = 64;    // Concurrent operations
pub const TREE_CANOPY_DEPTH: u8 = 10;        // Keeps proofs at 4 nodes
