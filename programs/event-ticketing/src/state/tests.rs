#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;
    use crate::errors::TicketingError;
    use crate::state::{CreateEventParams, Event, Ledger, PaymentMethod, Ticket};
    use crate::tests::assert_ticketing_error;
    use crate::utils::reentrancy::ReentrancyGuard;

    fn params(name: &str, ticket_price: u64, max_ticket_count: u32) -> CreateEventParams {
        CreateEventParams {
            name: name.to_string(),
            ticket_price,
            max_ticket_count,
        }
    }

    fn open(params: &CreateEventParams, payment: PaymentMethod) -> Result<Event> {
        Event::open(0, Pubkey::new_unique(), params, payment, 1_700_000_000, 254)
    }

    #[test]
    fn test_account_sizes() {
        assert_eq!(Ledger::SIZE, 81);
        assert_eq!(Event::SIZE, 131);
        assert_eq!(Ticket::SIZE, 121);
        assert_eq!(ReentrancyGuard::INIT_SPACE, 2);
    }

    #[test]
    fn test_serialized_sizes_fit_allocations() {
        let token = PaymentMethod::Token { mint: Pubkey::new_unique() };
        let event = open(&params("Conf", 100, 2), token).unwrap();
        assert_eq!(event.try_to_vec().unwrap().len(), Event::SIZE);

        let native = open(&params("Conf", 100, 2), PaymentMethod::Native).unwrap();
        assert!(native.try_to_vec().unwrap().len() <= Event::SIZE);

        assert_eq!(Ledger::default().try_to_vec().unwrap().len(), Ledger::SIZE);
    }

    #[test]
    fn test_open_event_defaults() {
        let event = open(&params("Conf", 100, 2), PaymentMethod::Native).unwrap();

        assert_eq!(event.name(), "Conf");
        assert_eq!(event.ticket_price, 100);
        assert_eq!(event.max_ticket_count, 2);
        assert_eq!(event.tickets_sold, 0);
        assert!(event.sales_active);
        assert!(event.ensure_can_sell().is_ok());
        assert_eq!(event.payment, PaymentMethod::Native);
        assert_eq!(event.created_at, 1_700_000_000);
        assert_eq!(event.bump, 254);
    }

    #[test]
    fn test_event_validation() {
        let native = |name: &str, price: u64, cap: u32| {
            open(&params(name, price, cap), PaymentMethod::Native)
        };

        assert_ticketing_error(native("Conf", 0, 2), TicketingError::InvalidTicketPrice);
        assert_ticketing_error(native("Conf", 100, 0), TicketingError::InvalidTicketCount);
        assert_ticketing_error(native("", 100, 2), TicketingError::EmptyEventName);
        assert_ticketing_error(native("   ", 100, 2), TicketingError::EmptyEventName);
        assert_ticketing_error(native(&"A".repeat(33), 100, 2), TicketingError::EventNameTooLong);
        assert_ticketing_error(native("Too🎉Emoji", 100, 2), TicketingError::InvalidCharacters);

        // Unreachable through create_token_event, where the mint account
        // must already be owned by a token program
        assert_ticketing_error(
            open(&params("Conf", 100, 2), PaymentMethod::Token { mint: Pubkey::default() }),
            TicketingError::InvalidPaymentToken,
        );

        assert!(native("Conf", 1, 1).is_ok());
        let token = PaymentMethod::Token { mint: Pubkey::new_unique() };
        assert!(open(&params("Conf", 1, 1), token).is_ok());
    }

    #[test]
    fn test_ledger_counters_are_post_increment() {
        let mut ledger = Ledger::default();

        assert_eq!(ledger.allocate_event_id().unwrap(), 0);
        assert_eq!(ledger.allocate_event_id().unwrap(), 1);
        assert_eq!(ledger.total_events, 2);

        assert_eq!(ledger.allocate_ticket_id(16_384).unwrap(), 0);
        assert_eq!(ledger.total_tickets, 1);
        assert_eq!(ledger.total_events, 2);
    }

    #[test]
    fn test_ledger_counter_overflow() {
        let mut ledger = Ledger {
            total_events: u64::MAX,
            ..Ledger::default()
        };
        assert_ticketing_error(ledger.allocate_event_id(), TicketingError::MathOverflow);
        assert_eq!(ledger.total_events, u64::MAX);
    }

    #[test]
    fn test_payment_method_mint() {
        let mint = Pubkey::new_unique();
        assert_eq!(PaymentMethod::Native.mint(), None);
        assert_eq!(PaymentMethod::Token { mint }.mint(), Some(mint));
    }
}
