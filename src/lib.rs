#![doc = include_str!("../README.md")]

mod analysis;
mod auth;
pub mod commands;
mod date;
mod lkr;
mod records;
mod store;

pub use analysis::{
    branch_sales, branch_totals, grand_total, price_statistics, week_window, weekly_totals,
    PriceStats, WeeklyTotals,
};
pub use auth::authenticate;
pub use commands::{CommandOutput, Series};
pub use date::{parse_date, today, DateFormatError};
pub use lkr::Lkr;
pub use records::{Branch, Product, Sale, User};
pub use store::{Resource, Store};
