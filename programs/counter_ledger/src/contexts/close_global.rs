use crate::{
    error::CounterError,
    state::{GlobalAccount, GlobalAccountClosed},
    utils::{global_account_address, store, Authorize, GLOBAL_AUTHORITY},
};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CloseGlobalAccount<'info> {
    /// CHECK: matched against `["global_account"]` by the handler.
    #[account(mut)]
    pub global_account: UncheckedAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,
}

impl<'info> CloseGlobalAccount<'info> {
    pub fn process(ctx: Context<Self>) -> Result<()> {
        GLOBAL_AUTHORITY.authorize(ctx.accounts.admin.key)?;
        msg!("Closing global account");

        let (address, _) = global_account_address(ctx.program_id)?;
        require_keys_eq!(
            ctx.accounts.global_account.key(),
            address,
            CounterError::InvalidAddress
        );

        let global: GlobalAccount = store::read(&ctx.accounts.global_account, ctx.program_id)?;
        store::deallocate(&ctx.accounts.global_account, &ctx.accounts.admin)?;

        emit!(GlobalAccountClosed {
            admin: ctx.accounts.admin.key(),
            global_counter: global.global_counter,
        });
        Ok(())
    }
}
