use crate::{
    error::CounterError,
    state::{CounterIncremented, GlobalAccount, UserAccount},
    utils::{global_account_address, store, user_account_address},
};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Increment<'info> {
    /// CHECK: loaded and matched against the signer by the handler.
    #[account(mut)]
    pub user_account: UncheckedAccount<'info>,

    /// CHECK: loaded and matched against `["global_account"]` by the handler.
    #[account(mut)]
    pub global_account: UncheckedAccount<'info>,

    pub user: Signer<'info>,
}

impl<'info> Increment<'info> {
    pub fn process(ctx: Context<Self>) -> Result<()> {
        msg!("Incrementing account: {:?}", ctx.accounts.user_account.key());
        let signer = ctx.accounts.user.key();

        let mut user: UserAccount = store::read(&ctx.accounts.user_account, ctx.program_id)?;
        require_keys_eq!(user.owner, signer, CounterError::SignerMismatch);

        let (user_address, _) = user_account_address(&signer, ctx.program_id)?;
        require_keys_eq!(
            ctx.accounts.user_account.key(),
            user_address,
            CounterError::InvalidAddress
        );

        let (global_address, _) = global_account_address(ctx.program_id)?;
        require_keys_eq!(
            ctx.accounts.global_account.key(),
            global_address,
            CounterError::InvalidAddress
        );
        let mut global: GlobalAccount =
            store::read(&ctx.accounts.global_account, ctx.program_id)?;

        user.increment(&mut global)?;
        store::commit(&[
            store::stage(&ctx.accounts.user_account, &user)?,
            store::stage(&ctx.accounts.global_account, &global)?,
        ])?;

        emit!(CounterIncremented {
            owner: signer,
            personal_counter: user.personal_counter,
            global_counter: global.global_counter,
        });
        Ok(())
    }
}
