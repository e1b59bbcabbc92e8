use anchor_lang::prelude::*;

#[error_code]
pub enum CounterError {
    #[msg("Account already in use.")]
    AlreadyInUse,

    #[msg("Caller is not authorized")]
    NotAuthorized,

    #[msg("Account not found.")]
    NotFound,

    #[msg("Only the owner can modify this account.")]
    SignerMismatch,

    #[msg("Unable to find a viable program address bump seed.")]
    AddressDerivationExhausted,

    #[msg("Account address does not match its expected seeds.")]
    InvalidAddress,

    #[msg("Counter overflow.")]
    Overflow,
}
