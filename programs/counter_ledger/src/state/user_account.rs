use crate::{error::CounterError, state::GlobalAccount};
use anchor_lang::prelude::*;

#[account]
#[derive(Debug, InitSpace)]
pub struct UserAccount {
    pub owner: Pubkey,
    pub personal_counter: u64,
}

impl UserAccount {
    pub fn new(owner: Pubkey) -> Self {
        Self {
            owner,
            personal_counter: 0,
        }
    }

    /// Adds one to this counter and one to `global`. Both sums are checked
    /// before either field is written, so on overflow neither changes.
    pub fn increment(&mut self, global: &mut GlobalAccount) -> Result<()> {
        let personal_counter = self
            .personal_counter
            .checked_add(1)
            .ok_or(CounterError::Overflow)?;
        let global_counter = global
            .global_counter
            .checked_add(1)
            .ok_or(CounterError::Overflow)?;

        self.personal_counter = personal_counter;
        global.global_counter = global_counter;
        Ok(())
    }
}
