use anchor_lang::prelude::*;
use crate::errors::TicketingError;
use crate::constants::*;
use crate::utils::validate_string;

pub fn validate_event_name(name: &str) -> Result<()> {
    require!(!name.trim().is_empty(), TicketingError::EmptyEventName);
    require!(
        name.len() <= MAX_EVENT_NAME,
        TicketingError::EventNameTooLong
    );
    validate_string(name)
}

pub fn validate_ticket_price(price: u64) -> Result<()> {
    require!(price > 0, TicketingError::InvalidTicketPrice);
    Ok(())
}

pub fn validate_capacity(capacity: u32) -> Result<()> {
    require!(capacity > 0, TicketingError::InvalidTicketCount);
    Ok(())
}

pub fn validate_payment_mint(mint: &Pubkey) -> Result<()> {
    require!(
        *mint != Pubkey::default(),
        TicketingError::InvalidPaymentToken
    );
    Ok(())
}

pub fn validate_metadata_uri(uri: &str) -> Result<()> {
    require!(uri.len() <= MAX_URI_LENGTH, TicketingError::UriTooLong);
    Ok(())
}
