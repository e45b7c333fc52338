use super::format::format_currency;
use super::types::{FormattedAmounts, MONTHLY_RATE, ProjectionSummary};

/// Compounds `principal` once per month at [`MONTHLY_RATE`].
///
/// The accumulation is a plain repeated multiplication, so results match a
/// month-by-month loop bit for bit rather than `principal * factor.powi(n)`.
/// Non-positive month counts leave the principal untouched.
pub fn project(principal: f64, period_months: i64) -> f64 {
    let factor = 1.0 + MONTHLY_RATE;
    let mut total = principal;
    for _ in 0..period_months.max(0) {
        let next = total * factor;
        // 0, NaN, infinities and the smallest subnormals map to themselves.
        let settled = next == total || !next.is_finite();
        total = next;
        if settled {
            break;
        }
    }
    total
}

pub fn gain(principal: f64, period_months: i64) -> f64 {
    project(principal, period_months) - principal
}

pub fn projection(principal: f64, period_months: i64) -> ProjectionSummary {
    let projected_value = project(principal, period_months);
    let gain = gain(principal, period_months);
    ProjectionSummary {
        monthly_rate: MONTHLY_RATE,
        months: period_months,
        principal,
        projected_value,
        gain,
        formatted: FormattedAmounts {
            initial: format_currency(principal),
            projected: format_currency(projected_value),
            gain: format_currency(gain),
        },
    }
}
