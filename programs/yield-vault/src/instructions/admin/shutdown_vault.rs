use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::events::VaultShutDownEvent;
use crate::state::Vault;

#[derive(Accounts)]
pub struct ShutdownVault<'info> {
    #[account(mut, has_one = admin)]
    pub vault: Account<'info, Vault>,

    #[account()]
    pub admin: Signer<'info>,
}

/// one-way switch: deposits are blocked from here on, withdrawals keep working
pub fn handle_shutdown_vault(ctx: Context<ShutdownVault>) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    if vault.is_shutdown {
        return Err(ErrorCode::VaultShutdown.into());
    }
    vault.is_shutdown = true;
    vault.deposit_limit = 0;

    emit!(VaultShutDownEvent {
        vault_key: vault.key,
        shutdown: true,
    });

    Ok(())
}
