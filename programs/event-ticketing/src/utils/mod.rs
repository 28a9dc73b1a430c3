pub mod validation;
pub mod merkle;
pub mod reentrancy;

use anchor_lang::prelude::*;
use crate::errors::TicketingError;

pub fn string_to_bytes(input: &str, max_len: usize) -> Result<Vec<u8>> {
    require!(
        input.len() <= max_len,
        TicketingError::EventNameTooLong
    );

    let mut bytes = input.as_bytes().to_vec();
    bytes.resize(max_len, 0);
    Ok(bytes)
}

pub fn bytes_to_string(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec())
        .unwrap_or_default()
        .trim_end_matches('\0')
        .to_string()
}

pub fn validate_string(input: &str) -> Result<()> {
    require!(
        input.chars().all(|c| c.is_ascii_graphic() || c == ' '),
        TicketingError::InvalidCharacters
    );
    Ok(())
}

pub fn safe_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(TicketingError::MathOverflow.into())
}

pub fn safe_mul(a: u64, b: u64) -> Result<u64> {
    a.checked_mul(b).ok_or(TicketingError::MathOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_round_trip_pads_with_zeros() {
        let bytes = string_to_bytes("Conf", 32).unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes[4], 0);
        assert_eq!(bytes_to_string(&bytes), "Conf");
    }

    #[test]
    fn test_string_too_long() {
        assert!(string_to_bytes(&"A".repeat(33), 32).is_err());
        assert!(string_to_bytes(&"A".repeat(32), 32).is_ok());
    }
}
