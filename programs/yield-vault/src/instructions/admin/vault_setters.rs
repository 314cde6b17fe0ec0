use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::events::{VaultAccountantUpdatedEvent, VaultProperty, VaultPropertyUpdatedEvent};
use crate::state::Vault;
use crate::util::now_ts;

#[derive(Accounts)]
pub struct SetVaultProperty<'info> {
    #[account(mut, has_one = admin)]
    pub vault: Account<'info, Vault>,

    #[account()]
    pub admin: Signer<'info>,
}

fn emit_update(vault: &Vault, property: VaultProperty, value: u64) -> Result<()> {
    emit!(VaultPropertyUpdatedEvent {
        vault_key: vault.key,
        property,
        value,
        timestamp: now_ts()? as i64,
    });
    Ok(())
}

fn check_not_shutdown(vault: &Vault) -> Result<()> {
    if vault.is_shutdown {
        return Err(ErrorCode::VaultShutdown.into());
    }
    Ok(())
}

pub fn handle_set_deposit_limit(ctx: Context<SetVaultProperty>, value: u64) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    check_not_shutdown(vault)?;
    vault.deposit_limit = value;
    emit_update(vault, VaultProperty::DepositLimit, value)
}

pub fn handle_set_user_deposit_limit(ctx: Context<SetVaultProperty>, value: u64) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    check_not_shutdown(vault)?;
    vault.user_deposit_limit = value;
    emit_update(vault, VaultProperty::UserDepositLimit, value)
}

pub fn handle_set_min_user_deposit(ctx: Context<SetVaultProperty>, value: u64) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    check_not_shutdown(vault)?;
    vault.min_user_deposit = value;
    emit_update(vault, VaultProperty::MinUserDeposit, value)
}

pub fn handle_set_minimum_total_idle(ctx: Context<SetVaultProperty>, value: u64) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    check_not_shutdown(vault)?;
    vault.minimum_total_idle = value;
    emit_update(vault, VaultProperty::MinimumTotalIdle, value)
}

pub fn handle_set_profit_max_unlock_time(ctx: Context<SetVaultProperty>, value: u64) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    check_not_shutdown(vault)?;
    vault.profit_max_unlock_time = value;
    emit_update(vault, VaultProperty::ProfitMaxUnlockTime, value)
}

pub fn handle_set_whitelisted_only(ctx: Context<SetVaultProperty>, value: bool) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    check_not_shutdown(vault)?;
    vault.whitelisted_only = value;
    emit_update(vault, VaultProperty::WhitelistedOnly, value as u64)
}

pub fn handle_set_kyc_verified_only(ctx: Context<SetVaultProperty>, value: bool) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    check_not_shutdown(vault)?;
    vault.kyc_verified_only = value;
    emit_update(vault, VaultProperty::KycVerifiedOnly, value as u64)
}

pub fn handle_set_direct_deposit_enabled(ctx: Context<SetVaultProperty>, value: bool) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    check_not_shutdown(vault)?;
    vault.direct_deposit_enabled = value;
    emit_update(vault, VaultProperty::DirectDepositEnabled, value as u64)
}

// withdraw-path toggles stay available on a shut-down vault
pub fn handle_set_direct_withdraw_enabled(
    ctx: Context<SetVaultProperty>,
    value: bool,
) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    vault.direct_withdraw_enabled = value;
    emit_update(vault, VaultProperty::DirectWithdrawEnabled, value as u64)
}

pub fn handle_set_accountant(ctx: Context<SetVaultProperty>, value: Pubkey) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    check_not_shutdown(vault)?;
    vault.accountant = value;
    emit!(VaultAccountantUpdatedEvent {
        vault_key: vault.key,
        new_accountant: value,
        timestamp: now_ts()? as i64,
    });
    Ok(())
}

pub fn handle_set_rebalancer_auth(ctx: Context<SetVaultProperty>, value: Pubkey) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    check_not_shutdown(vault)?;
    vault.rebalancer_auth = value;
    Ok(())
}
