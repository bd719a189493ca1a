//! Duration ceilings for maturity buckets.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// The upper bound of a maturity bucket, measured from an anchor date.
///
/// The regulatory tables declare bucket chains such as
/// `[1 week, 3 months, 1 year, 2 years, 3 years]`. Each ceiling knows how to
/// turn an anchor date into the bucket's end date, and how to extrapolate the
/// chain one more step once the declared prefix is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BucketCeiling {
    /// Ceiling measured in weeks. The end date is `7n - 1` days after the
    /// anchor, so a 1-week bucket ends 6 days out.
    Weeks(u32),
    /// Ceiling measured in calendar months, day clamped to the target month.
    Months(u32),
    /// Ceiling measured in calendar years, day stepped back when the naive
    /// result does not exist.
    Years(u32),
    /// No upper bound; the catch-all tail of a chain (e.g. the swaption
    /// option-maturity bucket "over 10 years").
    Unbounded,
}

impl BucketCeiling {
    /// A ceiling of `n` weeks.
    #[must_use]
    pub fn weeks(n: u32) -> Self {
        BucketCeiling::Weeks(n)
    }

    /// A ceiling of `n` calendar months.
    #[must_use]
    pub fn months(n: u32) -> Self {
        BucketCeiling::Months(n)
    }

    /// A ceiling of `n` calendar years.
    #[must_use]
    pub fn years(n: u32) -> Self {
        BucketCeiling::Years(n)
    }

    /// The unbounded catch-all ceiling.
    #[must_use]
    pub fn unbounded() -> Self {
        BucketCeiling::Unbounded
    }

    /// Returns true if this ceiling has no end date.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, BucketCeiling::Unbounded)
    }

    /// Computes the bucket end date for a window anchored at `anchor`.
    ///
    /// Returns `None` for the unbounded ceiling. The anchor is always the
    /// subject's from-date; ceilings are never chained off a previous
    /// bucket's boundary.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the arithmetic leaves the
    /// supported date range.
    pub fn end_date_from(&self, anchor: Date) -> CoreResult<Option<Date>> {
        match self {
            BucketCeiling::Weeks(n) => Ok(Some(anchor.add_days(i64::from(*n) * 7 - 1))),
            BucketCeiling::Months(n) => anchor.add_months(*n as i32).map(Some),
            BucketCeiling::Years(n) => anchor.add_years(*n as i32).map(Some),
            BucketCeiling::Unbounded => Ok(None),
        }
    }

    /// Derives the next ceiling in an extrapolated chain.
    ///
    /// The step is the period difference between `previous` and `self`, so
    /// `[.., 2 years, 3 years]` extrapolates to 4 years, 5 years, and so on.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CeilingStep` if the two ceilings use different
    /// duration units, either is unbounded, or the step is not positive.
    pub fn stepped_from(&self, previous: &BucketCeiling) -> CoreResult<BucketCeiling> {
        let (prev_n, this_n, make): (u32, u32, fn(u32) -> BucketCeiling) =
            match (previous, self) {
                (BucketCeiling::Weeks(p), BucketCeiling::Weeks(t)) => (*p, *t, BucketCeiling::Weeks),
                (BucketCeiling::Months(p), BucketCeiling::Months(t)) => {
                    (*p, *t, BucketCeiling::Months)
                }
                (BucketCeiling::Years(p), BucketCeiling::Years(t)) => (*p, *t, BucketCeiling::Years),
                (prev, this) => {
                    return Err(CoreError::ceiling_step(format!(
                        "cannot extrapolate from {prev} to {this}: duration units differ"
                    )))
                }
            };
        if this_n <= prev_n {
            return Err(CoreError::ceiling_step(format!(
                "step from {previous} to {self} is not positive"
            )));
        }
        Ok(make(this_n + (this_n - prev_n)))
    }

    /// A human-readable label such as "1 week", "3 months" or "unbounded".
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BucketCeiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn plural(n: u32, unit: &str) -> String {
            if n == 1 {
                format!("{n} {unit}")
            } else {
                format!("{n} {unit}s")
            }
        }
        match self {
            BucketCeiling::Weeks(n) => write!(f, "{}", plural(*n, "week")),
            BucketCeiling::Months(n) => write!(f, "{}", plural(*n, "month")),
            BucketCeiling::Years(n) => write!(f, "{}", plural(*n, "year")),
            BucketCeiling::Unbounded => write!(f, "unbounded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_week_end_date() {
        let end = BucketCeiling::weeks(1).end_date_from(d(2025, 3, 10)).unwrap();
        assert_eq!(end, Some(d(2025, 3, 16)));
    }

    #[test]
    fn test_month_end_date_clamps() {
        let end = BucketCeiling::months(1).end_date_from(d(2025, 1, 31)).unwrap();
        assert_eq!(end, Some(d(2025, 2, 28)));
    }

    #[test]
    fn test_year_end_date_leap_day() {
        let end = BucketCeiling::years(1).end_date_from(d(2024, 2, 29)).unwrap();
        assert_eq!(end, Some(d(2025, 2, 28)));
    }

    #[test]
    fn test_unbounded_has_no_end() {
        let end = BucketCeiling::unbounded()
            .end_date_from(d(2025, 1, 1))
            .unwrap();
        assert_eq!(end, None);
    }

    #[test]
    fn test_stepped_from_same_unit() {
        let next = BucketCeiling::years(3)
            .stepped_from(&BucketCeiling::years(2))
            .unwrap();
        assert_eq!(next, BucketCeiling::years(4));

        let next = BucketCeiling::months(6)
            .stepped_from(&BucketCeiling::months(3))
            .unwrap();
        assert_eq!(next, BucketCeiling::months(9));
    }

    #[test]
    fn test_stepped_from_mixed_units_fails() {
        let err = BucketCeiling::years(1)
            .stepped_from(&BucketCeiling::months(6))
            .unwrap_err();
        assert!(err.to_string().contains("duration units differ"));
    }

    #[test]
    fn test_stepped_from_non_positive_fails() {
        assert!(BucketCeiling::years(2)
            .stepped_from(&BucketCeiling::years(2))
            .is_err());
        assert!(BucketCeiling::years(1)
            .stepped_from(&BucketCeiling::years(3))
            .is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(BucketCeiling::weeks(1).label(), "1 week");
        assert_eq!(BucketCeiling::months(3).label(), "3 months");
        assert_eq!(BucketCeiling::years(1).label(), "1 year");
        assert_eq!(BucketCeiling::unbounded().label(), "unbounded");
    }
}
