mod interfaces;
mod phonenumber_based_parser;
mod policy;
mod policy_pattern;
mod regexp_cache;
pub mod i18n;

#[cfg(test)]
mod tests;

pub use interfaces::{NumberParser, ParsedNumber};
pub use phonenumber_based_parser::PhoneNumberBasedParser;
pub use policy::{
    errors::{InvalidNumberError, ParseNumberError, PolicyError},
    DefaultPolicy, PolicyConfig, ValidationPolicy, DEFAULT_COUNTRY,
};
pub use policy_pattern::PolicyPattern;
pub use regexp_cache::{InvalidRegexError, PatternCache};
