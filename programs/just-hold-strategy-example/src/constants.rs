use anchor_lang::prelude::*;

#[constant]
pub const AUTH_SEED: &[u8] = b"-auth-";
