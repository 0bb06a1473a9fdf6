//! Loan and lease payment calculations
//!
//! Closed-form monthly payment math used by the payment simulator. All
//! functions are pure; the only failure modes are rejected inputs and a
//! zero-length term.

use crate::error::EngineError;
use crate::finance::terms::LeaseTerms;

/// Monthly payment for a fully amortizing loan
///
/// The financed amount is `price - down_payment`, clamped to 0 when the down
/// payment covers the full price (the payment is then 0 regardless of rate or
/// term). With a zero rate the principal is spread evenly across the term.
///
/// # Errors
/// `InvalidInput` for negative price, down payment, or rate;
/// `DivideByZero` when `term_years` is 0.
pub fn finance_payment(
    price: f64,
    down_payment: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> Result<f64, EngineError> {
    if price < 0.0 {
        return Err(EngineError::invalid(format!("negative price: {price}")));
    }
    if down_payment < 0.0 {
        return Err(EngineError::invalid(format!(
            "negative down payment: {down_payment}"
        )));
    }
    if annual_rate_percent < 0.0 {
        return Err(EngineError::invalid(format!(
            "negative rate: {annual_rate_percent}"
        )));
    }

    let months = term_years * 12;
    if months == 0 {
        return Err(EngineError::DivideByZero("loan term is zero months"));
    }

    let loan_amount = (price - down_payment).max(0.0);
    if loan_amount == 0.0 {
        return Ok(0.0);
    }

    let monthly_rate = annual_rate_percent / 12.0 / 100.0;
    if monthly_rate == 0.0 {
        return Ok(loan_amount / months as f64);
    }

    // Standard amortization: P * r / (1 - (1+r)^-n)
    let n = months as i32;
    Ok(loan_amount * monthly_rate / (1.0 - (1.0 + monthly_rate).powi(-n)))
}

/// Monthly lease payment: straight-line depreciation to residual plus a
/// rent charge on (price + residual), less the amortized down payment
///
/// The result may be negative when the down payment is large relative to the
/// term; callers clamp to 0 for display.
///
/// # Errors
/// `InvalidInput` for negative price or down payment;
/// `DivideByZero` when the lease term is 0 months.
pub fn lease_payment(
    price: f64,
    down_payment: f64,
    terms: &LeaseTerms,
) -> Result<f64, EngineError> {
    if price < 0.0 {
        return Err(EngineError::invalid(format!("negative price: {price}")));
    }
    if down_payment < 0.0 {
        return Err(EngineError::invalid(format!(
            "negative down payment: {down_payment}"
        )));
    }
    if terms.term_months == 0 {
        return Err(EngineError::DivideByZero("lease term is zero months"));
    }

    let months = terms.term_months as f64;
    let residual_value = price * terms.residual_percent;
    let depreciation_portion = (price - residual_value) / months;
    let finance_portion = (price + residual_value) * terms.rent_charge;

    Ok(depreciation_portion + finance_portion - down_payment / months)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_spreads_principal_evenly() {
        // price/n for any n > 0 at zero rate
        let pmt = finance_payment(24_000.0, 0.0, 0.0, 5).unwrap();
        assert_relative_eq!(pmt, 24_000.0 / 60.0);
    }

    #[test]
    fn test_full_down_payment_is_free() {
        // Loan amount clamps to 0, payment is 0 for any rate/term
        assert_eq!(finance_payment(30_000.0, 30_000.0, 3.9, 5).unwrap(), 0.0);
        assert_eq!(finance_payment(30_000.0, 45_000.0, 5.9, 3).unwrap(), 0.0);
    }

    #[test]
    fn test_amortization_formula_against_hand_calc() {
        // 32_000 at 3.9% over 60 months: r = 0.00325
        // pmt = 32000 * 0.00325 / (1 - 1.00325^-60) = 588.01...
        let pmt = finance_payment(32_000.0, 0.0, 3.9, 5).unwrap();
        assert_relative_eq!(pmt, 588.0, epsilon = 0.5);
    }

    #[test]
    fn test_total_paid_exceeds_principal_at_positive_rate() {
        for &(price, down, rate, years) in &[
            (25_000.0, 2_000.0, 2.9, 4u32),
            (32_000.0, 0.0, 3.9, 5),
            (38_000.0, 5_000.0, 5.9, 8),
            (23_000.0, 1_000.0, 0.5, 1),
        ] {
            let pmt = finance_payment(price, down, rate, years).unwrap();
            let total_paid = pmt * (years * 12) as f64;
            assert!(
                total_paid >= price - down,
                "total {total_paid} below principal for rate {rate}"
            );
        }
    }

    #[test]
    fn test_zero_term_is_divide_by_zero() {
        let err = finance_payment(20_000.0, 0.0, 0.0, 0).unwrap_err();
        assert!(matches!(err, EngineError::DivideByZero(_)));
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = finance_payment(-1.0, 0.0, 3.9, 5).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn test_lease_payment_hand_calc() {
        // 32_000 lease, default terms: residual 17_600, dep (32_000-17_600)/36 = 400,
        // rent (32_000+17_600)*0.0025 = 124, no down => 524
        let pmt = lease_payment(32_000.0, 0.0, &LeaseTerms::default()).unwrap();
        assert_relative_eq!(pmt, 524.0, epsilon = 1e-9);
    }

    #[test]
    fn test_lease_down_payment_amortized() {
        let base = lease_payment(32_000.0, 0.0, &LeaseTerms::default()).unwrap();
        let with_down = lease_payment(32_000.0, 3_600.0, &LeaseTerms::default()).unwrap();
        assert_relative_eq!(base - with_down, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_lease_can_go_negative() {
        // Contract allows negative results; display layers clamp
        let pmt = lease_payment(10_000.0, 9_000.0, &LeaseTerms::default()).unwrap();
        assert!(pmt < 0.0);
    }

    #[test]
    fn test_lease_zero_term_is_divide_by_zero() {
        let terms = LeaseTerms {
            term_months: 0,
            ..LeaseTerms::default()
        };
        let err = lease_payment(32_000.0, 0.0, &terms).unwrap_err();
        assert!(matches!(err, EngineError::DivideByZero(_)));
    }
}
