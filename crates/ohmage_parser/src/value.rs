use serde::Serialize;

/// Numeric literal as written in a circuit file: mantissa, optional decimal
/// exponent, optional SI scale suffix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Value {
    pub value: f64,
    pub exponent: Option<f64>,
    pub suffix: Option<ValueSuffix>,
}

impl Value {
    pub fn new(value: f64, exponent: Option<f64>, suffix: Option<ValueSuffix>) -> Self {
        Self {
            value,
            exponent,
            suffix,
        }
    }

    pub fn get_value(&self) -> f64 {
        let mut value = self.value;
        if let Some(exponent) = self.exponent {
            value *= 10.0f64.powf(exponent);
        }
        if let Some(suffix) = &self.suffix {
            value *= suffix.scale();
        }
        value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueSuffix {
    Tera,
    Giga,
    Mega,
    Kilo,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Atto,
}

impl ValueSuffix {
    /// SPICE scale suffixes. `Meg` must be checked before the milli rule:
    /// a bare `M` (or `m`) is milli, never mega.
    pub fn from_str(s: &str) -> Option<ValueSuffix> {
        match s {
            s if s.starts_with("Meg") || s.starts_with("MEG") || s.starts_with("meg") => {
                Some(ValueSuffix::Mega)
            }
            s if s.starts_with("T") => Some(ValueSuffix::Tera),
            s if s.starts_with("G") => Some(ValueSuffix::Giga),
            s if s.starts_with("K") || s.starts_with("k") => Some(ValueSuffix::Kilo),
            s if s.starts_with("m") || s.starts_with("M") => Some(ValueSuffix::Milli),
            s if s.starts_with("u") || s.starts_with("U") => Some(ValueSuffix::Micro),
            s if s.starts_with("n") => Some(ValueSuffix::Nano),
            s if s.starts_with("p") => Some(ValueSuffix::Pico),
            s if s.starts_with("f") => Some(ValueSuffix::Femto),
            s if s.starts_with("a") => Some(ValueSuffix::Atto),
            _ => None,
        }
    }

    pub fn scale(&self) -> f64 {
        match self {
            ValueSuffix::Tera => 1e12,
            ValueSuffix::Giga => 1e9,
            ValueSuffix::Mega => 1e6,
            ValueSuffix::Kilo => 1e3,
            ValueSuffix::Milli => 1e-3,
            ValueSuffix::Micro => 1e-6,
            ValueSuffix::Nano => 1e-9,
            ValueSuffix::Pico => 1e-12,
            ValueSuffix::Femto => 1e-15,
            ValueSuffix::Atto => 1e-18,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::new(5.0, None, None), 5.0)]
    #[case(Value::new(1.0, None, Some(ValueSuffix::Kilo)), 1_000.0)]
    #[case(Value::new(4.7, None, Some(ValueSuffix::Mega)), 4_700_000.0)]
    #[case(Value::new(2.0, Some(3.0), None), 2_000.0)]
    #[case(Value::new(2.0, Some(-3.0), None), 0.002)]
    #[case(Value::new(1.5, Some(2.0), Some(ValueSuffix::Milli)), 0.15)]
    fn scales_values(#[case] value: Value, #[case] expected: f64) {
        assert_eq!(value.get_value(), expected);
    }

    #[rstest]
    #[case("k", Some(ValueSuffix::Kilo))]
    #[case("K", Some(ValueSuffix::Kilo))]
    #[case("Meg", Some(ValueSuffix::Mega))]
    #[case("meg", Some(ValueSuffix::Mega))]
    #[case("M", Some(ValueSuffix::Milli))]
    #[case("m", Some(ValueSuffix::Milli))]
    #[case("u", Some(ValueSuffix::Micro))]
    #[case("G", Some(ValueSuffix::Giga))]
    #[case("V", None)]
    #[case("Ohm", None)]
    fn recognizes_suffixes(#[case] s: &str, #[case] expected: Option<ValueSuffix>) {
        assert_eq!(ValueSuffix::from_str(s), expected);
    }
}
