//! Progressive bracket evaluation.
//!
//! A schedule is an ordered list of [`TaxBracket`] values with contiguous
//! half-open ranges `[min_income, max_income)` and an unbounded final
//! bracket. Schedules are validated once at rule-table load; the functions
//! here assume a well-formed schedule and never fail, whatever the amount.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use taxfolio_core::TaxBracket;
//! use taxfolio_core::calculations::brackets::{marginal_rate, progressive_tax};
//!
//! let brackets = vec![
//!     TaxBracket {
//!         min_income: dec!(0),
//!         max_income: Some(dec!(11000)),
//!         rate: dec!(0.10),
//!     },
//!     TaxBracket {
//!         min_income: dec!(11000),
//!         max_income: Some(dec!(44725)),
//!         rate: dec!(0.12),
//!     },
//!     TaxBracket {
//!         min_income: dec!(44725),
//!         max_income: None,
//!         rate: dec!(0.22),
//!     },
//! ];
//!
//! // 11000 × 0.10 + 26000 × 0.12 = 1100 + 3120
//! assert_eq!(progressive_tax(dec!(37000), &brackets), dec!(4220.00));
//! assert_eq!(marginal_rate(dec!(37000), &brackets), dec!(0.12));
//! ```

use rust_decimal::Decimal;

use crate::models::TaxBracket;

/// Evaluates progressive marginal tax for `amount` over a schedule.
///
/// Walks the brackets in order, taxing the slice of `amount` inside each
/// bracket's half-open range at that bracket's rate, and stops at the
/// first bracket whose lower bound is at or above `amount`. An amount
/// exactly on a boundary therefore contributes nothing at the higher
/// rate. Returns the exact, unrounded sum; callers round when recording
/// a tax line.
pub fn progressive_tax(
    amount: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    let mut tax = Decimal::ZERO;
    for bracket in brackets {
        if amount <= bracket.min_income {
            break;
        }
        let slice_top = match bracket.max_income {
            Some(max_income) => max_income.min(amount),
            None => amount,
        };
        tax += (slice_top - bracket.min_income) * bracket.rate;
    }
    tax
}

/// Rate of the bracket containing `amount`.
///
/// The containing bracket is the one whose half-open range includes the
/// last unit of income; an amount exactly on a boundary takes the higher
/// bracket's rate, and zero takes the first bracket's rate. Returns zero
/// for an empty schedule, which a validated rule table never produces.
pub fn marginal_rate(
    amount: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    brackets
        .iter()
        .find(|b| {
            amount >= b.min_income
                && (b.max_income.is_none() || amount < b.max_income.unwrap_or(Decimal::MAX))
        })
        .map(|b| b.rate)
        .unwrap_or(Decimal::ZERO)
}
