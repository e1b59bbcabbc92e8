use crate::{
    error::CounterError,
    state::{UserAccount, UserAccountClosed},
    utils::{store, user_account_address},
};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CloseUserAccount<'info> {
    /// CHECK: loaded and matched against the signer by the handler.
    #[account(mut)]
    pub user_account: UncheckedAccount<'info>,

    #[account(mut)]
    pub user: Signer<'info>,
}

impl<'info> CloseUserAccount<'info> {
    pub fn process(ctx: Context<Self>) -> Result<()> {
        msg!("Closing account for: {:?}", ctx.accounts.user_account.key());
        let signer = ctx.accounts.user.key();

        let user: UserAccount = store::read(&ctx.accounts.user_account, ctx.program_id)?;
        require_keys_eq!(user.owner, signer, CounterError::SignerMismatch);

        let (address, _) = user_account_address(&signer, ctx.program_id)?;
        require_keys_eq!(
            ctx.accounts.user_account.key(),
            address,
            CounterError::InvalidAddress
        );

        store::deallocate(&ctx.accounts.user_account, &ctx.accounts.user)?;

        emit!(UserAccountClosed {
            owner: signer,
            personal_counter: user.personal_counter,
        });
        Ok(())
    }
}
