pub mod cancel_withdrawal_request;
pub mod deposit;
pub mod direct_deposit;
pub mod fulfill_withdrawal_request;
pub mod init_withdraw_shares_account;
pub mod request_withdraw;
pub mod withdraw;

pub use cancel_withdrawal_request::*;
pub use deposit::*;
pub use direct_deposit::*;
pub use fulfill_withdrawal_request::*;
pub use init_withdraw_shares_account::*;
pub use request_withdraw::*;
pub use withdraw::*;
