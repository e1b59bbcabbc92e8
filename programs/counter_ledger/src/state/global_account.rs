use anchor_lang::prelude::*;

#[account]
#[derive(Debug, Default, InitSpace)]
pub struct GlobalAccount {
    pub global_counter: u64,
}
