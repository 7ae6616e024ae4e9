pub mod config;
pub mod ledger;
pub mod valuation;

pub use config::EconomyConfig;
pub use ledger::{EconomyState, PaydayEvent};
pub use valuation::{sell_value, signing_cost, total_wage_bill, weekly_salary};
