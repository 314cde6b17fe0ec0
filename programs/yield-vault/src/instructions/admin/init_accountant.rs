use anchor_lang::prelude::*;

use crate::constants::{
    ACCOUNTANT_SEED, DISCRIMINATOR_LEN, MAX_ENTRY_FEE_BP, MAX_REDEMPTION_FEE_BP,
};
use crate::events::AccountantFeesUpdatedEvent;
use crate::state::Accountant;
use crate::util::{check_fee_bp, now_ts};

#[derive(Accounts)]
pub struct InitAccountant<'info> {
    #[account(
        init,
        seeds = [ACCOUNTANT_SEED, signer.key().as_ref()],
        bump,
        payer = signer,
        space = DISCRIMINATOR_LEN + Accountant::INIT_SPACE,
    )]
    pub accountant: Account<'info, Accountant>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_init_accountant(
    ctx: Context<InitAccountant>,
    entry_fee_bp: u16,
    redemption_fee_bp: u16,
) -> Result<()> {
    check_fee_bp(entry_fee_bp, MAX_ENTRY_FEE_BP)?;
    check_fee_bp(redemption_fee_bp, MAX_REDEMPTION_FEE_BP)?;

    ctx.accounts.accountant.set_inner(Accountant {
        key: ctx.accounts.accountant.key(),
        bump: ctx.bumps.accountant,
        authority: ctx.accounts.signer.key(),
        entry_fee_bp,
        redemption_fee_bp,
    });

    emit!(AccountantFeesUpdatedEvent {
        accountant_key: ctx.accounts.accountant.key(),
        entry_fee_bp,
        redemption_fee_bp,
        timestamp: now_ts()? as i64,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetAccountantFees<'info> {
    #[account(mut, has_one = authority)]
    pub accountant: Account<'info, Accountant>,

    #[account()]
    pub authority: Signer<'info>,
}

pub fn handle_set_accountant_fees(
    ctx: Context<SetAccountantFees>,
    entry_fee_bp: u16,
    redemption_fee_bp: u16,
) -> Result<()> {
    check_fee_bp(entry_fee_bp, MAX_ENTRY_FEE_BP)?;
    check_fee_bp(redemption_fee_bp, MAX_REDEMPTION_FEE_BP)?;

    ctx.accounts.accountant.entry_fee_bp = entry_fee_bp;
    ctx.accounts.accountant.redemption_fee_bp = redemption_fee_bp;

    emit!(AccountantFeesUpdatedEvent {
        accountant_key: ctx.accounts.accountant.key(),
        entry_fee_bp,
        redemption_fee_bp,
        timestamp: now_ts()? as i64,
    });

    Ok(())
}
