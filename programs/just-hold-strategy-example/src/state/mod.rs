pub mod common_strategy_state;

pub use common_strategy_state::*;
