//! Millimeter/pixel conversion and dimension label formatting.
//!
//! Geometry never depends on the display unit: everything is stored in logical
//! pixels at [`MM_TO_PX`] and only label text goes through [`format_dimension`].

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use serde::{Deserialize, Serialize};

use crate::consts::{INCH_FRACTION_DENOMINATOR, MM_PER_INCH, MM_TO_PX};

/// Unit system used for label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Metric,
    Imperial,
}

impl std::str::FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "in" | "inch" => Ok(Self::Imperial),
            other => Err(format!("unknown unit `{other}` (expected metric or imperial)")),
        }
    }
}

#[must_use]
pub fn mm_to_px(mm: f64) -> f64 {
    mm * MM_TO_PX
}

#[must_use]
pub fn px_to_mm(px: f64) -> f64 {
    px / MM_TO_PX
}

/// Format a length in millimeters with one decimal, e.g. `"12.3mm"`.
#[must_use]
pub fn format_mm(mm: f64) -> String {
    format!("{mm:.1}mm")
}

/// Format a length as inches rounded to the nearest 1/64, reduced.
///
/// `6.35` → `1/4"`, `31.75` → `1-1/4"`, `50.8` → `2"`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn format_inches(mm: f64) -> String {
    let inches = mm.abs() / MM_PER_INCH;
    let total = (inches * INCH_FRACTION_DENOMINATOR as f64).round() as i64;
    let sign = if mm < 0.0 && total != 0 { "-" } else { "" };
    let whole = total / INCH_FRACTION_DENOMINATOR;
    let rem = total % INCH_FRACTION_DENOMINATOR;
    if rem == 0 {
        return format!("{sign}{whole}\"");
    }
    let g = gcd(rem, INCH_FRACTION_DENOMINATOR);
    let (num, den) = (rem / g, INCH_FRACTION_DENOMINATOR / g);
    if whole == 0 {
        format!("{sign}{num}/{den}\"")
    } else {
        format!("{sign}{whole}-{num}/{den}\"")
    }
}

/// Format a length for a label in the requested unit system.
#[must_use]
pub fn format_dimension(mm: f64, unit: Unit) -> String {
    match unit {
        Unit::Metric => format_mm(mm),
        Unit::Imperial => format_inches(mm),
    }
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}
