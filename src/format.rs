//! Human-readable number formatting for annotation text
//!
//! [`format_with_units`] scales a value into prose magnitudes ("2.5
//! billion"); [`ordinal_suffix`] supplies English ordinal endings. Display
//! helpers with long-standing quirks callers render verbatim: sub-thousand
//! values always carry two fraction digits no matter what precision the
//! caller asked for, and anything below 0.001 collapses to a literal `"0"`.

/// Left fold with 0; an empty slice sums to 0.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Magnitude suffixes recognized by [`format_with_units`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
enum Unit {
    Thousand,
    Million,
    Billion,
    Trillion,
    Quadrillion,
}

impl Unit {
    fn divisor(self) -> f64 {
        match self {
            Self::Thousand => 1e3,
            Self::Million => 1e6,
            Self::Billion => 1e9,
            Self::Trillion => 1e12,
            Self::Quadrillion => 1e15,
        }
    }

    /// Picks a unit from the digit count of `floor(value / 10)`.
    fn from_digit_count(digits: usize) -> Option<Self> {
        match digits {
            d if d >= 15 => Some(Self::Quadrillion),
            d if d >= 12 => Some(Self::Trillion),
            d if d >= 9 => Some(Self::Billion),
            d if d >= 6 => Some(Self::Million),
            d if d >= 3 => Some(Self::Thousand),
            _ => None,
        }
    }
}

/// Formats `value` at a human-readable magnitude.
///
/// At or above one thousand the value is divided down to its unit and
/// rendered with `decimals` fraction digits plus the unit name. Below one
/// thousand: values under 0.001 render as `"0"`, values under 0.1 as fixed
/// two-decimal, everything else as thousands-grouped two-decimal. The
/// `decimals` parameter only applies to the unit branches.
pub fn format_with_units(value: f64, decimals: usize) -> String {
    let digits = (value / 10.0).floor().to_string().len();
    if let Some(unit) = Unit::from_digit_count(digits) {
        let scaled = value / unit.divisor();
        return format!("{scaled:.decimals$} {unit}");
    }

    if value < 0.001 {
        "0".to_string()
    } else if value < 0.1 {
        format!("{value:.2}")
    } else {
        group_thousands(&format!("{value:.2}"))
    }
}

/// [`format_with_units`] at the usual single fraction digit.
pub fn format_with_units_default(value: f64) -> String {
    format_with_units(value, 1)
}

/// Inserts comma group separators into an already-formatted decimal string.
fn group_thousands(formatted: &str) -> String {
    let (int_part, frac) = match formatted.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (formatted, None),
    };
    let (sign, digits) = int_part
        .strip_prefix('-')
        .map_or(("", int_part), |rest| ("-", rest));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// English ordinal suffix for `n`.
///
/// The teens (11–19 and their hundreds-repeats, e.g. 111, 213) always take
/// `"th"`; otherwise the last digit decides.
pub fn ordinal_suffix(n: u64) -> &'static str {
    if (n % 100) / 10 == 1 {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
