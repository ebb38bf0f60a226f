//! Number and year presentation rules.
//!
//! Population magnitudes are grouped in thousands with a single ASCII space
//! (`16000` → `"16 000"`), the French convention of the dashboard. Years are
//! ordinal and never grouped. Exports bypass this module entirely and keep
//! raw integers.

use crate::error::{Error, Result};
use crate::models::{DisplayValue, Observation};
use num_format::{CustomFormat, Grouping, ToFormattedString};
use std::sync::OnceLock;

/// Separator inserted between thousands groups in styled values.
pub const THOUSANDS_SEPARATOR: &str = " ";

/// The builtin `fr` locale groups with a narrow no-break space; the dashboard
/// wants a plain ASCII space, hence a custom format.
fn thousands_format() -> &'static CustomFormat {
    static FORMAT: OnceLock<CustomFormat> = OnceLock::new();
    FORMAT.get_or_init(|| {
        CustomFormat::builder()
            .grouping(Grouping::Standard)
            .separator(THOUSANDS_SEPARATOR)
            .build()
            .expect("static custom format")
    })
}

/// Group a non-negative integer in thousands: `8949` → `"8 949"`,
/// `16000` → `"16 000"`, `0` → `"0"`. No decimals, no scientific notation.
pub fn style_thousands(n: i64) -> Result<String> {
    if n < 0 {
        return Err(Error::InvalidInput(format!(
            "cannot style negative value {n}"
        )));
    }
    Ok(n.to_formatted_string(thousands_format()))
}

/// Render a 4-digit year unchanged: `1968` → `"1968"`. Years are never
/// grouped.
pub fn style_year(y: i32) -> Result<String> {
    if !(1000..=9999).contains(&y) {
        return Err(Error::InvalidInput(format!(
            "year {y} does not have 4 digits"
        )));
    }
    Ok(y.to_string())
}

/// Both representations of an observation's population. Infallible because
/// observations are validated at construction.
pub fn display_value(obs: &Observation) -> DisplayValue {
    DisplayValue {
        raw: obs.population(),
        styled: obs.population().to_formatted_string(thousands_format()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Observation;

    #[test]
    fn groups_from_the_right_in_threes() {
        assert_eq!(style_thousands(999).unwrap(), "999");
        assert_eq!(style_thousands(1_000).unwrap(), "1 000");
        assert_eq!(style_thousands(14_854).unwrap(), "14 854");
        assert_eq!(style_thousands(1_234_567).unwrap(), "1 234 567");
    }

    #[test]
    fn display_value_keeps_raw_and_styled_in_sync() {
        let obs = Observation::new(2016, 14_854).unwrap();
        let dv = display_value(&obs);
        assert_eq!(dv.raw, 14_854);
        assert_eq!(dv.styled, "14 854");
    }
}
