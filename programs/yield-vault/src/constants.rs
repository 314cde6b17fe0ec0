use anchor_lang::prelude::*;

pub const DISCRIMINATOR_LEN: usize = 8;

#[constant]
pub const CONFIG_SEED: &[u8] = b"config";
#[constant]
pub const VAULT_SEED: &[u8] = b"vault";
#[constant]
pub const UNDERLYING_SEED: &[u8] = b"underlying";
#[constant]
pub const SHARES_SEED: &[u8] = b"shares";
#[constant]
pub const STRATEGY_DATA_SEED: &[u8] = b"strategy_data";
#[constant]
pub const USER_DATA_SEED: &[u8] = b"user_data";
#[constant]
pub const WITHDRAW_REQUEST_SEED: &[u8] = b"withdraw_request";
#[constant]
pub const WITHDRAW_SHARES_SEED: &[u8] = b"withdraw_shares";
#[constant]
pub const ACCOUNTANT_SEED: &[u8] = b"accountant";

#[constant]
pub const MAX_ENTRY_FEE_BP: u16 = 500;
#[constant]
pub const MAX_REDEMPTION_FEE_BP: u16 = 500;
#[constant]
pub const MAX_PERFORMANCE_FEE_BP: u16 = 5_000;
