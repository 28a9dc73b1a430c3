use anchor_lang::prelude::*;
use crate::constants::MAX_EVENT_NAME;
use crate::errors::TicketingError;
use crate::state::{CreateEventParams, EventDetails};
use crate::utils::validation::*;
use crate::utils::{bytes_to_string, safe_add, safe_mul, string_to_bytes};

/// How buyers pay for an event's tickets.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Lamports, held by the event account until withdrawn.
    Native,
    /// An SPL token, held by the event's vault token account.
    Token { mint: Pubkey },
}

impl PaymentMethod {
    pub const SIZE: usize = 1 + 32;

    pub fn mint(&self) -> Option<Pubkey> {
        match self {
            PaymentMethod::Native => None,
            PaymentMethod::Token { mint } => Some(*mint),
        }
    }
}

#[account]
#[derive(Debug)]
pub struct Event {
    pub event_id: u64,                // 8 bytes - Ledger-assigned id
    pub organizer: Pubkey,            // 32 bytes - Creator, sole admin
    pub name: [u8; 32],               // 32 bytes - Event name
    pub ticket_price: u64,            // 8 bytes - Lamports or token base units
    pub max_ticket_count: u32,        // 4 bytes - Total capacity
    pub tickets_sold: u32,            // 4 bytes - Sold since last withdrawal
    pub sales_active: bool,           // 1 byte - Purchases accepted
    pub payment: PaymentMethod,       // 33 bytes - Native or SPL mint
    pub created_at: i64,              // 8 bytes - Unix timestamp
    pub bump: u8,                     // 1 byte - PDA bump seed
}

impl Event {
    pub const SIZE: usize =
        8 +                           // event_id
        32 +                          // organizer
        MAX_EVENT_NAME +              // name
        8 +                           // ticket_price
        4 +                           // max_ticket_count
        4 +                           // tickets_sold
        1 +                           // sales_active
        PaymentMethod::SIZE +         // payment
        8 +                           // created_at
        1;                            // bump
    // Total: 131 bytes (plus 8 byte discriminator)

    /// Validates creation parameters and builds an open event.
    pub fn open(
        event_id: u64,
        organizer: Pubkey,
        params: &CreateEventParams,
        payment: PaymentMethod,
        created_at: i64,
        bump: u8,
    ) -> Result<Self> {
        validate_event_name(&params.name)?;
        validate_ticket_price(params.ticket_price)?;
        validate_capacity(params.max_ticket_count)?;
        if let PaymentMethod::Token { mint } = payment {
            validate_payment_mint(&mint)?;
        }

        let name: [u8; MAX_EVENT_NAME] = string_to_bytes(&params.name, MAX_EVENT_NAME)?
            .try_into()
            .map_err(|_| TicketingError::EventNameTooLong)?;

        Ok(Self {
            event_id,
            organizer,
            name,
            ticket_price: params.ticket_price,
            max_ticket_count: params.max_ticket_count,
            tickets_sold: 0,
            sales_active: true,
            payment,
            created_at,
            bump,
        })
    }

    pub fn name(&self) -> String {
        bytes_to_string(&self.name)
    }

    pub fn ensure_can_sell(&self) -> Result<()> {
        require!(self.sales_active, TicketingError::SalesEnded);
        require!(
            self.tickets_sold < self.max_ticket_count,
            TicketingError::SoldOut
        );
        Ok(())
    }

    /// Checks the value a buyer attached against the ticket price.
    pub fn check_native_payment(&self, amount: u64) -> Result<()> {
        self.ensure_can_sell()?;
        require!(
            self.payment == PaymentMethod::Native,
            TicketingError::WrongPaymentMethod
        );
        require!(amount == self.ticket_price, TicketingError::IncorrectAmount);
        Ok(())
    }

    /// Checks the buyer's token account against the event's payment token
    /// and returns the price to pull from it.
    pub fn check_token_payment(&self, mint: &Pubkey, balance: u64) -> Result<u64> {
        self.ensure_can_sell()?;
        require_keys_eq!(
            self.payment_mint()?,
            *mint,
            TicketingError::PaymentTokenMismatch
        );
        require!(
            balance >= self.ticket_price,
            TicketingError::InsufficientTokenBalance
        );
        Ok(self.ticket_price)
    }

    /// Returns the mint a token purchase must pay with.
    pub fn payment_mint(&self) -> Result<Pubkey> {
        self.payment
            .mint()
            .ok_or_else(|| error!(TicketingError::WrongPaymentMethod))
    }

    pub fn record_sale(&mut self) -> Result<()> {
        self.ensure_can_sell()?;
        self.tickets_sold = safe_add(self.tickets_sold as u64, 1)? as u32;
        Ok(())
    }

    /// Stops sales for good. Calling it again is a no-op.
    pub fn close_sales(&mut self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(
            *caller,
            self.organizer,
            TicketingError::OnlyOrganizerCanClose
        );
        self.sales_active = false;
        Ok(())
    }

    /// Owed to the organizer for tickets sold since the last withdrawal.
    pub fn pending_earnings(&self) -> Result<u64> {
        safe_mul(self.ticket_price, self.tickets_sold as u64)
    }

    /// Settles a lamport withdrawal from an event account holding `lamports`.
    /// The account keeps `rent_floor`. Zeroes the sold counter and returns
    /// the amount to move.
    pub fn settle_native_withdrawal(
        &mut self,
        caller: &Pubkey,
        lamports: u64,
        rent_floor: u64,
    ) -> Result<u64> {
        self.ensure_organizer_withdrawal(caller)?;
        require!(
            self.payment == PaymentMethod::Native,
            TicketingError::WrongPaymentMethod
        );
        let amount = self.pending_earnings()?;
        require!(
            lamports.saturating_sub(rent_floor) >= amount,
            TicketingError::InsufficientVaultBalance
        );
        self.tickets_sold = 0;
        Ok(amount)
    }

    /// Settles a token withdrawal from a vault holding `vault_balance` of
    /// `mint`. Zeroes the sold counter and returns the amount to move.
    pub fn settle_token_withdrawal(
        &mut self,
        caller: &Pubkey,
        mint: &Pubkey,
        vault_balance: u64,
    ) -> Result<u64> {
        self.ensure_organizer_withdrawal(caller)?;
        require_keys_eq!(
            self.payment_mint()?,
            *mint,
            TicketingError::PaymentTokenMismatch
        );
        let amount = self.pending_earnings()?;
        require!(
            vault_balance >= amount,
            TicketingError::InsufficientVaultBalance
        );
        self.tickets_sold = 0;
        Ok(amount)
    }

    fn ensure_organizer_withdrawal(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(
            *caller,
            self.organizer,
            TicketingError::OnlyOrganizerCanWithdraw
        );
        Ok(())
    }

    pub fn details(&self) -> EventDetails {
        EventDetails {
            event_id: self.event_id,
            name: self.name(),
            ticket_price: self.ticket_price,
            max_ticket_count: self.max_ticket_count,
            tickets_sold: self.tickets_sold,
            organizer: self.organizer,
            sales_active: self.sales_active,
            payment_mint: self.payment.mint(),
        }
    }
}
