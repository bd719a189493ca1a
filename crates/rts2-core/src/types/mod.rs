//! Domain types for the RTS 2 classification engine.
//!
//! - [`Date`]: calendar date with bucketing-friendly arithmetic
//! - [`BucketCeiling`]: duration ceiling of a maturity bucket
//! - [`Money`]: amount with currency, used by threshold tables
//! - [`Currency`]: ISO 4217 currency codes

mod ceiling;
mod date;
mod money;

pub use ceiling::BucketCeiling;
pub use date::Date;
pub use money::{Currency, Money};
