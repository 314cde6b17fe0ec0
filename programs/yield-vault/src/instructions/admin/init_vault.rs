use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CONFIG_SEED, DISCRIMINATOR_LEN, SHARES_SEED, UNDERLYING_SEED, VAULT_SEED};
use crate::events::VaultInitEvent;
use crate::state::{Config, Vault, VaultConfig};

#[derive(Accounts)]
pub struct InitVault<'info> {
    #[account(
        init,
        seeds = [
            VAULT_SEED,
            config.next_vault_index.to_le_bytes().as_ref()
        ],
        bump,
        payer = signer,
        space = DISCRIMINATOR_LEN + Vault::INIT_SPACE,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        init,
        seeds = [UNDERLYING_SEED, vault.key().as_ref()],
        bump,
        payer = signer,
        token::mint = underlying_mint,
        token::authority = vault,
    )]
    pub underlying_token_account: Box<Account<'info, TokenAccount>>,

    #[account()]
    pub underlying_mint: Box<Account<'info, Mint>>,

    // share tokens mirror the underlying decimals, so share price 1.0 reads as 1:1
    #[account(
        init,
        seeds = [SHARES_SEED, vault.key().as_ref()],
        bump,
        payer = signer,
        mint::decimals = underlying_mint.decimals,
        mint::authority = vault,
    )]
    pub shares_mint: Box<Account<'info, Mint>>,

    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub config: Box<Account<'info, Config>>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handle_init_vault(ctx: Context<InitVault>, config: Box<VaultConfig>) -> Result<()> {
    let index = ctx.accounts.config.next_vault_index;
    let vault_key = ctx.accounts.vault.key();
    ctx.accounts.vault.init(
        index,
        ctx.bumps.vault,
        vault_key,
        ctx.accounts.signer.key(),
        ctx.accounts.underlying_mint.key(),
        ctx.accounts.underlying_mint.decimals,
        ctx.accounts.underlying_token_account.key(),
        ctx.accounts.shares_mint.key(),
        config.as_ref(),
    )?;

    ctx.accounts.config.next_vault_index += 1;

    emit!(VaultInitEvent {
        vault_key: ctx.accounts.vault.key(),
        underlying_mint: ctx.accounts.underlying_mint.key(),
        underlying_token_account: ctx.accounts.underlying_token_account.key(),
        underlying_decimals: ctx.accounts.underlying_mint.decimals,
        shares_mint: ctx.accounts.shares_mint.key(),
        accountant: config.accountant,
        deposit_limit: config.deposit_limit,
        user_deposit_limit: config.user_deposit_limit,
        min_user_deposit: config.min_user_deposit,
        minimum_total_idle: config.minimum_total_idle,
        profit_max_unlock_time: config.profit_max_unlock_time,
        kyc_verified_only: config.kyc_verified_only,
        whitelisted_only: config.whitelisted_only,
        direct_deposit_enabled: config.direct_deposit_enabled,
        direct_withdraw_enabled: config.direct_withdraw_enabled,
    });

    Ok(())
}
