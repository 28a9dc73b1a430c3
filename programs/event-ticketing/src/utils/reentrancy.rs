use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use crate::errors::TicketingError;

/// Per-event lock held for the duration of any handler that moves funds.
#[account]
#[derive(InitSpace)]
pub struct ReentrancyGuard {
    pub is_locked: bool,
    pub bump: u8,
}

impl ReentrancyGuard {
    pub fn lock(&mut self) -> Result<()> {
        require!(!self.is_locked, TicketingError::ReentrancyLocked);
        self.is_locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) -> Result<()> {
        self.is_locked = false;
        Ok(())
    }
}

/// Locks the guard and writes it back to account data right away, so a
/// nested invocation that loads the same account sees the lock before any
/// CPI runs.
pub fn acquire_lock(guard: &mut Account<'_, ReentrancyGuard>) -> Result<()> {
    guard.lock()?;
    guard.exit(&crate::ID)
}

/// Releases the guard and writes it back to account data.
pub fn release_lock(guard: &mut Account<'_, ReentrancyGuard>) -> Result<()> {
    guard.unlock()?;
    guard.exit(&crate::ID)
}
