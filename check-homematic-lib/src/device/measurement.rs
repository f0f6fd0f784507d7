/// The result of reading one typed value from a device.
#[derive(Debug, Clone, PartialEq)]
pub enum Measurement<T> {
    /// The value was present and well-formed.
    Found(T),

    /// The device does not report this value.
    Missing,

    /// The device reports this value, but the raw text could not be interpreted.
    Invalid(String),
}

impl<T> Measurement<T> {
    /// Parse raw text if present, producing `Missing` when there is none.
    pub(super) fn from_raw(raw: Option<&str>, parse: impl FnOnce(&str) -> Option<T>) -> Self {
        match raw {
            None => Self::Missing,
            Some(text) => parse(text.trim()).map_or_else(|| Self::Invalid(text.to_string()), Self::Found),
        }
    }
}

pub(super) fn parse_flag(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") || text == "1" {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") || text == "0" {
        Some(false)
    } else {
        None
    }
}

pub(super) fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
