use anchor_lang::prelude::*;
use anchor_spl::token::{mint_to, transfer, Mint, MintTo, Token, TokenAccount, Transfer};

use crate::constants::{DISCRIMINATOR_LEN, USER_DATA_SEED, VAULT_SEED};
use crate::error::ErrorCode;
use crate::events::VaultDepositEvent;
use crate::state::external::call_deploy_funds;
use crate::state::{Accountant, StrategyData, UserData, Vault};
use crate::util::now_ts;

/// deposit and push the funds into one strategy inside the same transaction,
/// skipping the idle reserve and the debt allocator round trip
#[derive(Accounts)]
pub struct DirectDeposit<'info> {
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

    #[account(
        mut,
        has_one = vault,
        has_one = strategy_program,
        constraint = strategy_data.strategy == strategy_state.key() @ErrorCode::InvalidStrategyData,
    )]
    pub strategy_data: Box<Account<'info, StrategyData>>,

    /// CHECK: checked against strategy_data.strategy
    #[account(mut)]
    pub strategy_state: UncheckedAccount<'info>,

    /// CHECK: forwarded to the strategy program, which validates its own PDA
    pub strategy_auth: UncheckedAccount<'info>,

    #[account(
        mut,
        token::mint = vault.underlying_mint,
    )]
    pub strategy_underlying_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: checked against strategy_data.strategy_program
    #[account(executable)]
    pub strategy_program: UncheckedAccount<'info>,

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

pub fn handle_direct_deposit(ctx: Context<DirectDeposit>, amount: u64) -> Result<()> {
    let now = now_ts()?;
    let vault = &mut ctx.accounts.vault;
    let user_data = &mut ctx.accounts.user_data;
    let strategy_data = &mut ctx.accounts.strategy_data;

    if !vault.direct_deposit_enabled {
        return Err(ErrorCode::DirectDepositDisabled.into());
    }
    if user_data.user == Pubkey::default() {
        user_data.vault = vault.key();
        user_data.user = ctx.accounts.depositor.key();
    }
    vault.check_deposit_policy(user_data, amount)?;

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

    // deploy up to the strategy's remaining debt headroom
    let headroom = strategy_data.max_debt.saturating_sub(strategy_data.current_debt);
    let to_deploy = std::cmp::min(amount, headroom);
    let mut deployed: u64 = 0;
    if to_deploy > 0 {
        transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.underlying_token_account.to_account_info(),
                    to: ctx.accounts.strategy_underlying_account.to_account_info(),
                    authority: vault.to_account_info(),
                },
                signer_seeds,
            ),
            to_deploy,
        )?;
        ctx.accounts.underlying_token_account.reload()?;
        let balance_before = ctx.accounts.underlying_token_account.amount;
        call_deploy_funds(
            &ctx.accounts.strategy_program.to_account_info(),
            &[
                ctx.accounts.strategy_state.to_account_info(),
                ctx.accounts.strategy_auth.to_account_info(),
                ctx.accounts.strategy_underlying_account.to_account_info(),
                ctx.accounts.underlying_token_account.to_account_info(),
                ctx.accounts.token_program.to_account_info(),
            ],
            to_deploy,
        )?;
        ctx.accounts.underlying_token_account.reload()?;
        // whatever the strategy refused came straight back
        let returned = ctx.accounts.underlying_token_account.amount - balance_before;
        deployed = to_deploy - returned;
    }
    let remainder = amount - deployed;

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

    strategy_data.current_debt += deployed;
    strategy_data.last_update = now;
    vault.handle_direct_deposit(deployed, remainder, user_shares, fee_shares);
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
