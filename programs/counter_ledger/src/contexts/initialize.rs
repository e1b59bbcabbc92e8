use crate::{
    error::CounterError,
    state::{UserAccount, UserAccountInitialized},
    utils::{store, user_account_address, SEED_USER_ACCOUNT},
};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// CHECK: created by the handler at `["user_account", user]`.
    #[account(mut)]
    pub user_account: UncheckedAccount<'info>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn process(ctx: Context<Self>) -> Result<()> {
        msg!("Greetings from: {:?}", ctx.program_id);
        let owner = ctx.accounts.user.key();

        let (address, bump) = user_account_address(&owner, ctx.program_id)?;
        require_keys_eq!(
            ctx.accounts.user_account.key(),
            address,
            CounterError::InvalidAddress
        );

        store::create(
            &ctx.accounts.user_account,
            &ctx.accounts.user,
            &ctx.accounts.system_program,
            &[SEED_USER_ACCOUNT, owner.as_ref(), &[bump]],
            ctx.program_id,
            &UserAccount::new(owner),
        )?;

        emit!(UserAccountInitialized { owner });
        Ok(())
    }
}
