//! # RTS 2 Core
//!
//! Domain primitives shared across the RTS 2 classification crates:
//!
//! - **`Date`**: calendar date with the month/year arithmetic the maturity
//!   bucketing rules depend on (day clamping, leap-day step-back)
//! - **`BucketCeiling`**: the duration ceiling of a maturity bucket
//!   (weeks, months, years, or unbounded)
//! - **`Money` / `Currency`**: threshold amounts from the regulatory tables
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: newtypes and closed enums instead of stringly-typed data
//! - **Explicit Over Implicit**: invalid dates and malformed ceiling chains
//!   are `Err` values, never panics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{BucketCeiling, Currency, Date, Money};
