use anchor_lang::prelude::*;
use anchor_spl::token::{mint_to, transfer, Mint, MintTo, Token, TokenAccount, Transfer};

use crate::constants::{DISCRIMINATOR_LEN, USER_DATA_SEED, VAULT_SEED};
use crate::events::VaultDepositEvent;
use crate::state::{Accountant, UserData, Vault};
use crate::util::now_ts;

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        has_one = underlying_token_account,
        has_one = shares_mint,
        has_one = accountant,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        init_if_needed,
        payer = depositor,
        space = DISCRIMINATOR_LEN + UserData::INIT_SPACE,
        seeds = [USER_DATA_SEED, vault.key().as_ref(), depositor.key().as_ref()],
        bump
    )]
    pub user_data: Box<Account<'info, UserData>>,

    pub accountant: Box<Account<'info, Accountant>>,

    #[account(mut)]
    pub underlying_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub shares_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        token::mint = vault.underlying_mint,
        token::authority = depositor,
    )]
    pub depositor_underlying_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = shares_mint,
    )]
    pub depositor_shares_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = shares_mint,
        token::authority = vault.accountant,
    )]
    pub accountant_shares_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handle_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let now = now_ts()?;
    let vault = &mut ctx.accounts.vault;
    let user_data = &mut ctx.accounts.user_data;

    if user_data.user == Pubkey::default() {
        user_data.vault = vault.key();
        user_data.user = ctx.accounts.depositor.key();
    }
    vault.check_deposit_policy(user_data, amount)?;

    // entry fee is carved from the amount before conversion, so the fee
    // dilution is paid by the depositor and not by existing holders
    let fee_amount = ctx.accounts.accountant.entry_fee(amount);
    let user_shares = vault.convert_to_shares(amount - fee_amount, now);
    let fee_shares = vault.convert_to_shares(fee_amount, now);

    transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_underlying_account.to_account_info(),
                to: ctx.accounts.underlying_token_account.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
    )?;

    let index_bytes = vault.index.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, index_bytes.as_ref(), &[vault.bump]]];
    mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.shares_mint.to_account_info(),
                to: ctx.accounts.depositor_shares_account.to_account_info(),
                authority: vault.to_account_info(),
            },
            signer_seeds,
        ),
        user_shares,
    )?;
    if fee_shares > 0 {
        mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.shares_mint.to_account_info(),
                    to: ctx.accounts.accountant_shares_account.to_account_info(),
                    authority: vault.to_account_info(),
                },
                signer_seeds,
            ),
            fee_shares,
        )?;
    }

    vault.handle_deposit(amount, user_shares, fee_shares);
    user_data.handle_deposit(amount);

    emit!(VaultDepositEvent {
        vault_key: vault.key(),
        authority: ctx.accounts.depositor.key(),
        amount,
        shares_minted: user_shares,
        fee_shares,
        token_account: ctx.accounts.depositor_underlying_account.key(),
        share_account: ctx.accounts.depositor_shares_account.key(),
        total_idle: vault.total_idle,
        total_debt: vault.total_debt,
        total_shares: vault.total_shares,
        share_price: vault.get_share_price(now),
        timestamp: now as i64,
    });

    Ok(())
}
