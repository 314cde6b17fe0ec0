pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod util;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("63xLdD2v4dBKWtCNg6iZo4MkcRfy54DNqCjCGLfMKdt6");

#[program]
pub mod yield_vault {
    use super::*;

    //-------------------------
    //---- global config ------
    //-------------------------

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize::handle_initialize(ctx)
    }

    //-------------------------
    //---- admin --------------
    //-------------------------

    pub fn init_vault(ctx: Context<InitVault>, config: Box<VaultConfig>) -> Result<()> {
        init_vault::handle_init_vault(ctx, config)
    }

    pub fn init_accountant(
        ctx: Context<InitAccountant>,
        entry_fee_bp: u16,
        redemption_fee_bp: u16,
    ) -> Result<()> {
        init_accountant::handle_init_accountant(ctx, entry_fee_bp, redemption_fee_bp)
    }

    pub fn set_accountant_fees(
        ctx: Context<SetAccountantFees>,
        entry_fee_bp: u16,
        redemption_fee_bp: u16,
    ) -> Result<()> {
        init_accountant::handle_set_accountant_fees(ctx, entry_fee_bp, redemption_fee_bp)
    }

    pub fn add_strategy(
        ctx: Context<AddStrategy>,
        max_debt: u64,
        performance_fee_bp: u16,
    ) -> Result<()> {
        add_strategy::handle_add_strategy(ctx, max_debt, performance_fee_bp)
    }

    pub fn remove_strategy(ctx: Context<RemoveStrategy>, force: bool) -> Result<()> {
        remove_strategy::handle_remove_strategy(ctx, force)
    }

    pub fn shutdown_vault(ctx: Context<ShutdownVault>) -> Result<()> {
        shutdown_vault::handle_shutdown_vault(ctx)
    }

    pub fn close_vault(ctx: Context<CloseVault>) -> Result<()> {
        close_vault::handle_close_vault(ctx)
    }

    pub fn set_whitelisted(ctx: Context<SetUserFlags>, whitelisted: bool) -> Result<()> {
        whitelist::handle_set_whitelisted(ctx, whitelisted)
    }

    pub fn set_kyc_verified(ctx: Context<SetUserFlags>, kyc_verified: bool) -> Result<()> {
        whitelist::handle_set_kyc_verified(ctx, kyc_verified)
    }

    pub fn set_deposit_limit(ctx: Context<SetVaultProperty>, value: u64) -> Result<()> {
        vault_setters::handle_set_deposit_limit(ctx, value)
    }

    pub fn set_user_deposit_limit(ctx: Context<SetVaultProperty>, value: u64) -> Result<()> {
        vault_setters::handle_set_user_deposit_limit(ctx, value)
    }

    pub fn set_min_user_deposit(ctx: Context<SetVaultProperty>, value: u64) -> Result<()> {
        vault_setters::handle_set_min_user_deposit(ctx, value)
    }

    pub fn set_minimum_total_idle(ctx: Context<SetVaultProperty>, value: u64) -> Result<()> {
        vault_setters::handle_set_minimum_total_idle(ctx, value)
    }

    pub fn set_profit_max_unlock_time(ctx: Context<SetVaultProperty>, value: u64) -> Result<()> {
        vault_setters::handle_set_profit_max_unlock_time(ctx, value)
    }

    pub fn set_whitelisted_only(ctx: Context<SetVaultProperty>, value: bool) -> Result<()> {
        vault_setters::handle_set_whitelisted_only(ctx, value)
    }

    pub fn set_kyc_verified_only(ctx: Context<SetVaultProperty>, value: bool) -> Result<()> {
        vault_setters::handle_set_kyc_verified_only(ctx, value)
    }

    pub fn set_direct_deposit_enabled(ctx: Context<SetVaultProperty>, value: bool) -> Result<()> {
        vault_setters::handle_set_direct_deposit_enabled(ctx, value)
    }

    pub fn set_direct_withdraw_enabled(ctx: Context<SetVaultProperty>, value: bool) -> Result<()> {
        vault_setters::handle_set_direct_withdraw_enabled(ctx, value)
    }

    pub fn set_accountant(ctx: Context<SetVaultProperty>, value: Pubkey) -> Result<()> {
        vault_setters::handle_set_accountant(ctx, value)
    }

    pub fn set_rebalancer_auth(ctx: Context<SetVaultProperty>, value: Pubkey) -> Result<()> {
        vault_setters::handle_set_rebalancer_auth(ctx, value)
    }

    //-------------------------
    //---- users --------------
    //-------------------------

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        deposit::handle_deposit(ctx, amount)
    }

    pub fn direct_deposit(ctx: Context<DirectDeposit>, amount: u64) -> Result<()> {
        direct_deposit::handle_direct_deposit(ctx, amount)
    }

    pub fn withdraw<'info>(
        ctx: Context<'_, '_, 'info, 'info, Withdraw<'info>>,
        amount: u64,
        max_loss: u64,
    ) -> Result<()> {
        withdraw::handle_withdraw(ctx, amount, max_loss)
    }

    pub fn redeem<'info>(
        ctx: Context<'_, '_, 'info, 'info, Withdraw<'info>>,
        shares: u64,
        max_loss: u64,
    ) -> Result<()> {
        withdraw::handle_redeem(ctx, shares, max_loss)
    }

    pub fn init_withdraw_shares_account(ctx: Context<InitWithdrawSharesAccount>) -> Result<()> {
        init_withdraw_shares_account::handle_init_withdraw_shares_account(ctx)
    }

    pub fn request_withdraw(
        ctx: Context<RequestWithdraw>,
        amount: u64,
        max_loss: u64,
    ) -> Result<()> {
        request_withdraw::handle_request_withdraw(ctx, amount, max_loss)
    }

    pub fn request_redeem(ctx: Context<RequestWithdraw>, shares: u64, max_loss: u64) -> Result<()> {
        request_withdraw::handle_request_redeem(ctx, shares, max_loss)
    }

    pub fn cancel_withdrawal_request(ctx: Context<CancelWithdrawalRequest>) -> Result<()> {
        cancel_withdrawal_request::handle_cancel_withdrawal_request(ctx)
    }

    pub fn fulfill_withdrawal_request(ctx: Context<FulfillWithdrawalRequest>) -> Result<()> {
        fulfill_withdrawal_request::handle_fulfill_withdrawal_request(ctx)
    }

    //-------------------------
    //---- cranks -------------
    //-------------------------

    pub fn update_debt(ctx: Context<UpdateDebt>, target_debt: u64) -> Result<()> {
        update_debt::handle_update_debt(ctx, target_debt)
    }

    pub fn process_report(ctx: Context<ProcessReport>) -> Result<()> {
        process_report::handle_process_report(ctx)
    }
}
