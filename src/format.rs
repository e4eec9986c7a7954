//! Locale-aware number formatting for hover labels and trend badges.

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

/// Fraction digits kept when formatting display values.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Number locale used for display strings (digit grouping and decimal mark).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberLocale {
    #[default]
    En,
    De,
    Fr,
    Es,
    It,
    Pt,
    Nl,
}

impl NumberLocale {
    const fn locale(self) -> Locale {
        match self {
            Self::En => Locale::en,
            Self::De => Locale::de,
            Self::Fr => Locale::fr,
            Self::Es => Locale::es,
            Self::It => Locale::it,
            Self::Pt => Locale::pt,
            Self::Nl => Locale::nl,
        }
    }

    /// Decimal mark for this locale.
    #[must_use]
    pub fn decimal(self) -> &'static str {
        self.locale().decimal()
    }
}

impl std::str::FromStr for NumberLocale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "en" | "en_us" | "en_gb" | "us" => Ok(Self::En),
            "de" | "de_de" | "german" => Ok(Self::De),
            "fr" | "fr_fr" => Ok(Self::Fr),
            "es" | "es_es" => Ok(Self::Es),
            "it" | "it_it" => Ok(Self::It),
            "pt" | "pt_pt" | "pt_br" => Ok(Self::Pt),
            "nl" | "nl_nl" => Ok(Self::Nl),
            _ => Err(format!("Unknown locale: {s}")),
        }
    }
}

/// Format a value with digit grouping and up to three fraction digits.
///
/// Trailing fraction zeros are dropped, so `1234.50` becomes `1,234.5` in `en`
/// and `1.234,5` in `de`. Non-finite values format as `0`. Magnitudes beyond
/// `u128` print their whole digits without grouping.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_number(value: f64, locale: NumberLocale) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let scale = 10_u32.pow(MAX_FRACTION_DIGITS);
    let magnitude = value.abs();
    let mut whole = magnitude.trunc();
    let mut fraction = ((magnitude - whole) * f64::from(scale)).round() as u32;
    if fraction == scale {
        whole += 1.0;
        fraction = 0;
    }

    let mut out = String::new();
    if value < 0.0 && (whole > 0.0 || fraction != 0) {
        out.push('-');
    }
    if whole < u128::MAX as f64 {
        out.push_str(&(whole as u128).to_formatted_string(&locale.locale()));
    } else {
        out.push_str(&format!("{whole:.0}"));
    }

    if fraction != 0 {
        let digits = format!("{fraction:0width$}", width = MAX_FRACTION_DIGITS as usize);
        out.push_str(locale.decimal());
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Format a value with an explicit sign for any nonzero input.
///
/// Values that round to zero keep their sign (`+0`, `-0`) so the text agrees
/// with the sign of `value`. Zero and non-finite values carry no sign.
#[must_use]
pub fn format_signed(value: f64, locale: NumberLocale) -> String {
    let magnitude = format_number(value.abs(), locale);
    if !value.is_finite() || value == 0.0 {
        magnitude
    } else if value > 0.0 {
        format!("+{magnitude}")
    } else {
        format!("-{magnitude}")
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
