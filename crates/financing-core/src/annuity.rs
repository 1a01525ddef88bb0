//! Fixed-installment amortization primitive.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::types::{Money, Percent};

const PERCENT: Decimal = dec!(100);

/// Fixed periodic installment that amortizes `present_value` over `periods`
/// at `periodic_rate` (percent per period).
///
/// Uses the standard annuity formula `pv * r * (1+r)^n / ((1+r)^n - 1)`.
/// A zero rate degenerates to a straight-line split. Total over its inputs:
/// zero periods yields zero, and a zero or negative present value passes
/// through to a zero or negative installment.
pub fn pmt(periodic_rate: Percent, periods: u32, present_value: Money) -> Money {
    if periods == 0 {
        return Decimal::ZERO;
    }
    if periodic_rate.is_zero() {
        return present_value / Decimal::from(periods);
    }

    let r = periodic_rate / PERCENT;
    let factor = (Decimal::ONE + r).powu(periods as u64);
    present_value * r * factor / (factor - Decimal::ONE)
}
