pub mod initialize_ledger;
pub mod create_event;
pub mod create_token_event;
pub mod purchase_ticket;
pub mod purchase_ticket_with_token;
pub mod close_ticket_sales;
pub mod withdraw_earnings;
pub mod withdraw_token_earnings;
pub mod read_ledger;
pub mod event_details;

pub use initialize_ledger::*;
pub use create_event::*;
pub use create_token_event::*;
pub use purchase_ticket::*;
pub use purchase_ticket_with_token::*;
pub use close_ticket_sales::*;
pub use withdraw_earnings::*;
pub use withdraw_token_earnings::*;
pub use read_ledger::*;
pub use event_details::*;
