use crate::{
    error::CounterError,
    state::{GlobalAccount, GlobalAccountInitialized},
    utils::{global_account_address, store, Authorize, GLOBAL_AUTHORITY, SEED_GLOBAL_ACCOUNT},
};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitializeGlobal<'info> {
    /// CHECK: created by the handler at `["global_account"]`.
    #[account(mut)]
    pub global_account: UncheckedAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeGlobal<'info> {
    pub fn process(ctx: Context<Self>) -> Result<()> {
        // Must run before the global account is inspected.
        GLOBAL_AUTHORITY.authorize(ctx.accounts.admin.key)?;
        msg!("Initializing global account");

        let (address, bump) = global_account_address(ctx.program_id)?;
        require_keys_eq!(
            ctx.accounts.global_account.key(),
            address,
            CounterError::InvalidAddress
        );

        store::create(
            &ctx.accounts.global_account,
            &ctx.accounts.admin,
            &ctx.accounts.system_program,
            &[SEED_GLOBAL_ACCOUNT, &[bump]],
            ctx.program_id,
            &GlobalAccount::default(),
        )?;

        emit!(GlobalAccountInitialized {
            admin: ctx.accounts.admin.key(),
        });
        Ok(())
    }
}
