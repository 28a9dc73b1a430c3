use anchor_lang::prelude::*;

#[error_code]
pub enum TicketingError {
    // Input validation
    #[msg("Event name cannot be empty")]
    EmptyEventName,
    #[msg("Event name exceeds 32 bytes")]
    EventNameTooLong,
    #[msg("Only printable ASCII characters are allowed")]
    InvalidCharacters,
    #[msg("Ticket price must be greater than zero")]
    InvalidTicketPrice,
    #[msg("Max ticket count must be greater than zero")]
    InvalidTicketCount,
    #[msg("Invalid payment token address")]
    InvalidPaymentToken,
    #[msg("Metadata URI is too long")]
    UriTooLong,

    // Sale state
    #[msg("Ticket sales have ended")]
    SalesEnded,
    #[msg("All tickets sold")]
    SoldOut,
    #[msg("Ticket tree is full")]
    TicketTreeFull,

    // Payment
    #[msg("Incorrect amount sent")]
    IncorrectAmount,
    #[msg("Event does not accept this payment method")]
    WrongPaymentMethod,
    #[msg("Token account does not match the event payment token")]
    PaymentTokenMismatch,
    #[msg("Insufficient token balance for ticket price")]
    InsufficientTokenBalance,
    #[msg("Event vault cannot cover the withdrawal")]
    InsufficientVaultBalance,

    // Authorization
    #[msg("Only the organizer can close ticket sales")]
    OnlyOrganizerCanClose,
    #[msg("Only the organizer can withdraw earnings")]
    OnlyOrganizerCanWithdraw,

    // Lookups
    #[msg("Ticket does not belong to this event")]
    TicketEventMismatch,
    #[msg("Merkle tree account has the wrong size")]
    InvalidTreeAccount,
    #[msg("Invalid tree depth")]
    InvalidTreeDepth,
    #[msg("Invalid buffer size")]
    InvalidBufferSize,
    #[msg("Invalid canopy depth")]
    InvalidCanopyDepth,

    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Operation locked due to reentrancy")]
    ReentrancyLocked,
}
