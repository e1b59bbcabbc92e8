use crate::error::CounterError;
use anchor_lang::{
    error::ErrorCode,
    prelude::*,
    system_program::{
        self, allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount,
        Transfer,
    },
    Discriminator, Space,
};

/// An address exists once it holds data or has been handed to a program.
pub fn exists(info: &AccountInfo) -> bool {
    !info.data_is_empty() || !info.owner.eq(&system_program::ID)
}

// Handlers only hold `&AccountInfo<'info>` borrowed from their context, which
// `Account::try_from` cannot take, so records are decoded here directly.
pub fn read<T: AccountDeserialize>(info: &AccountInfo, program_id: &Pubkey) -> Result<T> {
    require!(exists(info), CounterError::NotFound);
    require_keys_eq!(
        *info.owner,
        *program_id,
        ErrorCode::AccountOwnedByWrongProgram
    );

    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

/// Allocates `target` as a program-owned record holding `value`.
///
/// Fails with `AlreadyInUse` when the address already exists. An address that
/// only holds lamports is topped up, allocated and assigned in place, the
/// same way Anchor's `init` treats a pre-funded PDA.
pub fn create<'info, T>(
    target: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    signer_seeds: &[&[u8]],
    program_id: &Pubkey,
    value: &T,
) -> Result<()>
where
    T: AccountSerialize + Discriminator + Space,
{
    require!(!exists(target), CounterError::AlreadyInUse);

    let space = T::DISCRIMINATOR.len() + T::INIT_SPACE;
    let rent_exempt = Rent::get()?.minimum_balance(space);
    let current_lamports = target.lamports();

    if current_lamports == 0 {
        create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                &[signer_seeds],
            ),
            rent_exempt,
            space as u64,
            program_id,
        )?;
    } else {
        let top_up = rent_exempt.saturating_sub(current_lamports);
        if top_up > 0 {
            transfer(
                CpiContext::new(
                    system_program.clone(),
                    Transfer {
                        from: payer.clone(),
                        to: target.clone(),
                    },
                ),
                top_up,
            )?;
        }
        allocate(
            CpiContext::new_with_signer(
                system_program.clone(),
                Allocate {
                    account_to_allocate: target.clone(),
                },
                &[signer_seeds],
            ),
            space as u64,
        )?;
        assign(
            CpiContext::new_with_signer(
                system_program.clone(),
                Assign {
                    account_to_assign: target.clone(),
                },
                &[signer_seeds],
            ),
            program_id,
        )?;
    }

    let mut data = target.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    value.try_serialize(&mut writer)?;
    Ok(())
}

/// A serialized record waiting to be written by [`commit`].
pub struct StagedWrite<'a, 'info> {
    info: &'a AccountInfo<'info>,
    data: Vec<u8>,
}

pub fn stage<'a, 'info, T: AccountSerialize>(
    info: &'a AccountInfo<'info>,
    value: &T,
) -> Result<StagedWrite<'a, 'info>> {
    let mut data = Vec::new();
    value.try_serialize(&mut data)?;
    Ok(StagedWrite { info, data })
}

/// Writes every staged record, or none of them if any would fail.
pub fn commit(writes: &[StagedWrite]) -> Result<()> {
    for write in writes {
        require!(write.info.is_writable, ErrorCode::AccountNotMutable);
        require_gte!(
            write.info.data_len(),
            write.data.len(),
            ErrorCode::AccountDidNotSerialize
        );
        drop(write.info.try_borrow_mut_data()?);
    }

    for write in writes {
        let mut data = write.info.try_borrow_mut_data()?;
        data[..write.data.len()].copy_from_slice(&write.data);
    }
    Ok(())
}

/// Returns the rent of `info` to `receiver` and hands the address back to the
/// system program with no data. These are the steps of Anchor's `close`,
/// which is only reachable through an `Account`.
pub fn deallocate<'info>(info: &AccountInfo<'info>, receiver: &AccountInfo<'info>) -> Result<()> {
    let refunded = receiver
        .lamports()
        .checked_add(info.lamports())
        .ok_or(CounterError::Overflow)?;
    **receiver.try_borrow_mut_lamports()? = refunded;
    **info.try_borrow_mut_lamports()? = 0;

    info.assign(&system_program::ID);
    info.resize(0)?;
    Ok(())
}
