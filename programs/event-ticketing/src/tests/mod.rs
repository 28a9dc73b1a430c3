
use anchor_lang::prelude::*;
use crate::constants::{EVENT_SEED, MAX_EVENT_NAME};
use crate::errors::TicketingError;
use crate::state::{CreateEventParams, Event, Ledger, PaymentMethod, Ticket, TreeConfig};
use crate::utils::merkle::get_asset_id;

pub const NOW: i64 = 1_700_000_000;

pub fn assert_ticketing_error<T: std::fmt::Debug>(result: Result<T>, expected: TicketingError) {
    let expected_name = format!("{:?}", expected);
    let expected_code = expected as u32 + anchor_lang::error::ERROR_CODE_OFFSET;
    match result {
        Err(anchor_lang::error::Error::AnchorError(err)) => {
            assert_eq!(
                err.error_code_number, expected_code,
                "expected {}, got {}",
                expected_name, err.error_name
            );
        }
        other => panic!("expected {}, got {:?}", expected_name, other),
    }
}

pub fn params(name: &str, ticket_price: u64, max_ticket_count: u32) -> CreateEventParams {
    CreateEventParams {
        name: name.to_string(),
        ticket_price,
        max_ticket_count,
    }
}

pub fn event_address(event_id: u64) -> Pubkey {
    Pubkey::find_program_address(&[EVENT_SEED, &event_id.to_le_bytes()], &crate::ID).0
}

/// Runs the create_event bookkeeping against an in-memory ledger.
pub fn create_event(
    ledger: &mut Ledger,
    organizer: Pubkey,
    params: &CreateEventParams,
    payment: PaymentMethod,
) -> Result<Event> {
    let event_id = ledger.allocate_event_id()?;
    Event::open(event_id, organizer, params, payment, NOW, 255)
}

/// Native purchase through the same checks and bookkeeping the handler runs.
pub fn purchase(
    ledger: &mut Ledger,
    event: &mut Event,
    buyer: Pubkey,
    amount: u64,
) -> Result<Ticket> {
    event.check_native_payment(amount)?;
    let ticket_id = ledger.record_purchase(event, TreeConfig::optimal().capacity())?;
    Ok(issued_ticket(ledger, event, buyer, ticket_id))
}

/// Token purchase paid from a buyer account holding `balance` of `mint`.
pub fn purchase_with_token(
    ledger: &mut Ledger,
    event: &mut Event,
    buyer: Pubkey,
    mint: &Pubkey,
    balance: u64,
) -> Result<Ticket> {
    event.check_token_payment(mint, balance)?;
    let ticket_id = ledger.record_purchase(event, TreeConfig::optimal().capacity())?;
    Ok(issued_ticket(ledger, event, buyer, ticket_id))
}

fn issued_ticket(ledger: &Ledger, event: &Event, buyer: Pubkey, ticket_id: u64) -> Ticket {
    Ticket {
        ticket_id,
        event_id: event.event_id,
        event: event_address(event.event_id),
        buyer,
        asset_id: get_asset_id(&ledger.merkle_tree, ticket_id),
        purchased_at: NOW,
        bump: 255,
    }
}

pub const RENT_FLOOR: u64 = 1_238_880;

/// Native withdrawal from an event account holding its rent floor plus
/// every unsettled sale.
pub fn withdraw(event: &mut Event, caller: &Pubkey) -> Result<u64> {
    let proceeds = event.ticket_price.saturating_mul(event.tickets_sold as u64);
    event.settle_native_withdrawal(caller, RENT_FLOOR.saturating_add(proceeds), RENT_FLOOR)
}

#[test]
fn test_event_name_limit_matches_storage() {
    let event = Event::open(
        0,
        Pubkey::new_unique(),
        &params(&"N".repeat(MAX_EVENT_NAME), 1, 1),
        PaymentMethod::Native,
        NOW,
        255,
    )
    .unwrap();
    assert_eq!(event.name().len(), MAX_EVENT_NAME);
}
