mod coerce;
mod engine;
mod format;
mod types;

pub use coerce::{coerce_number, month_count};
pub use engine::{gain, project, projection};
pub use format::format_currency;
pub use types::{
    DEFAULT_AMOUNT, DEFAULT_MONTHS, FormattedAmounts, MONTHLY_RATE, ProjectionSummary,
};
