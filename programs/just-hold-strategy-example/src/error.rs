use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Declared deploy amount never arrived in the strategy token account")]
    DeployedFundsNotReceived,
}
