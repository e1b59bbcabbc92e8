use crate::{error::CounterError, ADMIN};
use anchor_lang::prelude::*;

/// Capability check over the identity that signed an instruction.
pub trait Authorize {
    fn authorize(&self, signer: &Pubkey) -> Result<()>;
}

/// Admits only the identities in a fixed list.
pub struct AllowList<'a> {
    members: &'a [Pubkey],
}

impl<'a> AllowList<'a> {
    pub const fn new(members: &'a [Pubkey]) -> Self {
        Self { members }
    }

    pub fn contains(&self, key: &Pubkey) -> bool {
        self.members.iter().any(|member| member.eq(key))
    }
}

impl Authorize for AllowList<'_> {
    fn authorize(&self, signer: &Pubkey) -> Result<()> {
        require!(self.contains(signer), CounterError::NotAuthorized);
        Ok(())
    }
}

/// Who may create or close the global account.
pub const GLOBAL_AUTHORITY: AllowList<'static> = AllowList::new(&[ADMIN]);
