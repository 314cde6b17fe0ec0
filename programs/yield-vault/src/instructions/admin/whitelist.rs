use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::{KycUpdatedEvent, WhitelistUpdatedEvent};
use crate::state::{UserData, Vault};

#[derive(Accounts)]
pub struct SetUserFlags<'info> {
    #[account(has_one = admin)]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: flags are stored under PDA(vault, user), no signature needed
    pub user: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = DISCRIMINATOR_LEN + UserData::INIT_SPACE,
        seeds = [USER_DATA_SEED, vault.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_data: Account<'info, UserData>,

    pub system_program: Program<'info, System>,
}

fn init_if_fresh(user_data: &mut UserData, vault: Pubkey, user: Pubkey) {
    if user_data.user == Pubkey::default() {
        user_data.vault = vault;
        user_data.user = user;
    }
}

pub fn handle_set_whitelisted(ctx: Context<SetUserFlags>, whitelisted: bool) -> Result<()> {
    let user_data = &mut ctx.accounts.user_data;
    init_if_fresh(user_data, ctx.accounts.vault.key(), ctx.accounts.user.key());
    user_data.whitelisted = whitelisted;

    emit!(WhitelistUpdatedEvent {
        vault_key: ctx.accounts.vault.key(),
        user: ctx.accounts.user.key(),
        whitelisted,
    });

    Ok(())
}

pub fn handle_set_kyc_verified(ctx: Context<SetUserFlags>, kyc_verified: bool) -> Result<()> {
    let user_data = &mut ctx.accounts.user_data;
    init_if_fresh(user_data, ctx.accounts.vault.key(), ctx.accounts.user.key());
    user_data.kyc_verified = kyc_verified;

    emit!(KycUpdatedEvent {
        vault_key: ctx.accounts.vault.key(),
        user: ctx.accounts.user.key(),
        kyc_verified,
    });

    Ok(())
}
