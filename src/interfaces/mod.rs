use crate::policy::errors::ParseNumberError;

/// What a phone number engine reports about one input string.
///
/// Transient: the policy reads it and drops it, nothing is retained
/// between calls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedNumber {
    /// Engine's own validity judgement for the number.
    pub valid: bool,
    /// Two-letter code of the region the number belongs to, if the engine
    /// could tell.
    pub country: Option<String>,
    /// Number in E.164 format: `+`, country calling code, national digits.
    pub e164: Option<String>,
}

impl ParsedNumber {
    pub fn valid(country: impl Into<String>, e164: impl Into<String>) -> Self {
        Self {
            valid: true,
            country: Some(country.into()),
            e164: Some(e164.into()),
        }
    }

    pub fn invalid(country: Option<String>, e164: Option<String>) -> Self {
        Self { valid: false, country, e164 }
    }
}

/// Phone number parsing API used to isolate the underlying engine from the
/// validation policy and allow different implementations to be swapped in
/// easily.
pub trait NumberParser: Send + Sync {
    /// Parses `text`, using `region_hint` to interpret numbers written
    /// without an international prefix.
    fn parse_number(&self, text: &str, region_hint: &str) -> Result<ParsedNumber, ParseNumberError>;
}
