use crate::{
    error::CounterError,
    utils::{SEED_GLOBAL_ACCOUNT, SEED_USER_ACCOUNT},
};
use anchor_lang::prelude::*;

/// Address and bump of the counter owned by `owner`.
pub fn user_account_address(owner: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(&[SEED_USER_ACCOUNT, owner.as_ref()], program_id)
}

/// Address and bump of the global counter. There is exactly one per program.
pub fn global_account_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(&[SEED_GLOBAL_ACCOUNT], program_id)
}

fn derive(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or_else(|| error!(CounterError::AddressDerivationExhausted))
}
