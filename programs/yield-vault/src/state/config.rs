use anchor_lang::prelude::*;

/// program-level singleton, PDA("config")
/// holds the monotonic counters used to derive vault and withdraw-request PDAs
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct Config {
    pub next_vault_index: u64,
    pub next_withdraw_request_index: u64,
}
