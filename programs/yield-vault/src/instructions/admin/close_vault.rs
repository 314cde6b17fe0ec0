use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::state::Vault;

#[derive(Accounts)]
pub struct CloseVault<'info> {
    #[account(mut, close = admin, has_one = admin)]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub admin: Signer<'info>,
}

pub fn handle_close_vault(ctx: Context<CloseVault>) -> Result<()> {
    let vault = &ctx.accounts.vault;
    if !vault.is_shutdown {
        return Err(ErrorCode::VaultActive.into());
    }
    if vault.total_debt > 0 {
        return Err(ErrorCode::VaultHasDebt.into());
    }
    if vault.total_shares > 0 {
        return Err(ErrorCode::VaultHasShares.into());
    }
    Ok(())
}
