use std::fmt;

use crate::data::model::Record;
use crate::error::ScoreError;

/// p-values strictly below this count as positives.
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.0001;

// ---------------------------------------------------------------------------
// TprSummary – counts behind the ratio
// ---------------------------------------------------------------------------

/// Positive and total counts for one record set. `total` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TprSummary {
    pub positives: usize,
    pub total: usize,
}

impl TprSummary {
    /// Share of positives, in `[0, 1]`.
    pub fn rate(&self) -> f64 {
        self.positives as f64 / self.total as f64
    }
}

/// Renders as the single output line, e.g. `TPR: 0.25`.
///
/// Whole numbers keep their decimal point (`TPR: 0.0`) and exponents carry
/// at least two digits (`TPR: 5e-05`).
impl fmt::Display for TprSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TPR: {}", format_rate(self.rate()))
    }
}

/// Shortest round-trip repr with a sign and two-digit exponent.
fn format_rate(rate: f64) -> String {
    let repr = format!("{rate:?}");
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

pub fn is_positive(record: &Record) -> bool {
    record.pvalue < SIGNIFICANCE_THRESHOLD
}

/// Count positives. Fails on an empty slice rather than dividing by zero later.
pub fn summarize(records: &[Record]) -> Result<TprSummary, ScoreError> {
    if records.is_empty() {
        return Err(ScoreError::EmptyInput);
    }
    let positives = records.iter().filter(|r| is_positive(r)).count();
    Ok(TprSummary {
        positives,
        total: records.len(),
    })
}

/// Fraction of records with a p-value below [`SIGNIFICANCE_THRESHOLD`].
pub fn compute_tpr(records: &[Record]) -> Result<f64, ScoreError> {
    summarize(records).map(|s| s.rate())
}
