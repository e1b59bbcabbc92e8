use anchor_lang::prelude::*;

#[event]
pub struct UserAccountInitialized {
    pub owner: Pubkey,
}

#[event]
pub struct GlobalAccountInitialized {
    pub admin: Pubkey,
}

#[event]
pub struct CounterIncremented {
    pub owner: Pubkey,
    pub personal_counter: u64,
    pub global_counter: u64,
}

#[event]
pub struct UserAccountClosed {
    pub owner: Pubkey,
    pub personal_counter: u64,
}

#[event]
pub struct GlobalAccountClosed {
    pub admin: Pubkey,
    pub global_counter: u64,
}
