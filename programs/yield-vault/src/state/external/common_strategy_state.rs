use anchor_lang::solana_program::hash::hash;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::invoke;
use anchor_lang::{error, prelude::AccountInfo, solana_program::pubkey::Pubkey, Result};
use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::ErrorCode::ErrDeserializingStrategyState;

// EXTERNAL state, belonging to strategy-programs.
// Any program whose state account starts with these fields (after the 8-byte
// discriminator) and that answers deploy_funds/free_funds/report through the
// Anchor global dispatch can be attached to a vault.
#[derive(Clone, Debug, BorshDeserialize, BorshSerialize, PartialEq)]
pub struct CommonStrategyState {
    pub discriminator: [u8; 8],

    pub underlying_mint: Pubkey,

    // self-reported value of everything the strategy holds, in underlying units
    // incremented when receiving tokens from the vault
    // incremented when yield is acquired
    // decremented on losses and when sending tokens back to the vault
    pub total_assets: u64,

    // underlying sitting in the strategy's token account, not yet deployed
    pub idle_underlying: u64,
}

/// deserialize common_strategy_state: &AccountInfo
pub fn deserialize(common_strategy_state: &AccountInfo) -> Result<CommonStrategyState> {
    let mut data_slice = &common_strategy_state.data.borrow()[..];
    CommonStrategyState::deserialize(&mut data_slice)
        .map_err(|_err| error!(ErrDeserializingStrategyState))
}

/// 8-byte Anchor discriminator for a global instruction
fn global_sighash(name: &str) -> [u8; 8] {
    let preimage = format!("global:{}", name);
    let mut sighash = [0u8; 8];
    sighash.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    sighash
}

fn strategy_cpi(
    strategy_program: &AccountInfo,
    accounts: &[AccountInfo],
    ix_name: &str,
    args: &[u8],
) -> Result<()> {
    let mut data = global_sighash(ix_name).to_vec();
    data.extend_from_slice(args);
    let metas: Vec<AccountMeta> = accounts
        .iter()
        .map(|a| AccountMeta {
            pubkey: *a.key,
            is_signer: a.is_signer,
            is_writable: a.is_writable,
        })
        .collect();
    invoke(
        &Instruction {
            program_id: *strategy_program.key,
            accounts: metas,
            data,
        },
        accounts,
    )?;
    Ok(())
}

/// tell the strategy to register/deploy `amount` already transferred to its token account;
/// whatever it refuses comes back to the vault token account in the same instruction
pub fn call_deploy_funds<'info>(
    strategy_program: &AccountInfo<'info>,
    accounts: &[AccountInfo<'info>],
    amount: u64,
) -> Result<()> {
    strategy_cpi(strategy_program, accounts, "deploy_funds", &amount.to_le_bytes())
}

/// ask the strategy to send back up to `amount` underlying; it may return less
pub fn call_free_funds<'info>(
    strategy_program: &AccountInfo<'info>,
    accounts: &[AccountInfo<'info>],
    amount: u64,
) -> Result<()> {
    strategy_cpi(strategy_program, accounts, "free_funds", &amount.to_le_bytes())
}

/// refresh the strategy's self-reported total_assets
pub fn call_report<'info>(
    strategy_program: &AccountInfo<'info>,
    accounts: &[AccountInfo<'info>],
) -> Result<()> {
    strategy_cpi(strategy_program, accounts, "report", &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sighash_matches_anchor_dispatch() {
        // Anchor derives instruction discriminators as sha256("global:<name>")[..8]
        assert_eq!(global_sighash("report").len(), 8);
        assert_ne!(global_sighash("deploy_funds"), global_sighash("free_funds"));
    }
}
