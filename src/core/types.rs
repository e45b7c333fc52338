use serde::Serialize;

/// Growth applied once per simulated month (6.5%).
pub const MONTHLY_RATE: f64 = 0.065;

pub const DEFAULT_AMOUNT: &str = "10000";
pub const DEFAULT_MONTHS: &str = "12";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedAmounts {
    pub initial: String,
    pub projected: String,
    pub gain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub monthly_rate: f64,
    pub months: i64,
    pub principal: f64,
    pub projected_value: f64,
    pub gain: f64,
    pub formatted: FormattedAmounts,
}
