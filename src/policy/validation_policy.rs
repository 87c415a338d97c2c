// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::{BTreeMap, HashMap};

use log::{debug, trace};
use strum::IntoEnumIterator;

use super::{
    config::PolicyConfig,
    default_policy::{DefaultPolicy, DEFAULT_COUNTRY},
    errors::{InvalidNumberError, PolicyError},
};
use crate::{
    interfaces::NumberParser,
    phonenumber_based_parser::PhoneNumberBasedParser,
    policy_pattern::PolicyPattern,
    regexp_cache::PatternCache,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Normalizes phone numbers to E.164 and enforces per-country shape rules
/// on top of the parser's own validity judgement.
pub struct ValidationPolicy {
    /// Engine doing the actual parsing and formatting.
    parser: Box<dyn NumberParser>,

    /// Country code to acceptance pattern. A country without an entry is
    /// accepted whenever the parser considers the number valid.
    policies: HashMap<String, PolicyPattern>,

    /// Region hint used by [`ValidationPolicy::parse`].
    default_country: String,

    /// Compiled patterns for the string based registration paths.
    pattern_cache: PatternCache,
}

impl ValidationPolicy {
    /// Policy with the default table, `US` as default country and the
    /// `phonenumber` crate as parser.
    pub fn new() -> Self {
        Self::with_default_country(DEFAULT_COUNTRY)
    }

    pub fn with_default_country(default_country: impl Into<String>) -> Self {
        Self::with_parser(Box::new(PhoneNumberBasedParser::new()), default_country)
    }

    /// Policy with the default table on top of a custom parser.
    pub fn with_parser(parser: Box<dyn NumberParser>, default_country: impl Into<String>) -> Self {
        let mut instance = Self::empty(parser, default_country);
        for policy in DefaultPolicy::iter() {
            let pattern = match instance.pattern_cache.get_pattern(policy.pattern()) {
                Ok(pattern) => pattern,
                Err(err) => {
                    let err_message = format!(
                        "Default pattern for {} must be a valid regex: {}",
                        policy.country_code(),
                        err
                    );
                    log::error!("{}", err_message);
                    panic!("{}", err_message);
                }
            };
            instance.policies.insert(policy.country_code().to_owned(), pattern);
        }
        instance
    }

    /// Policy with an empty table: every country falls back to the parser's
    /// validity judgement until patterns are added.
    pub fn empty(parser: Box<dyn NumberParser>, default_country: impl Into<String>) -> Self {
        Self {
            parser,
            policies: HashMap::new(),
            default_country: default_country.into(),
            pattern_cache: PatternCache::with_capacity(16),
        }
    }

    pub fn from_config(config: PolicyConfig) -> Result<Self> {
        Self::from_config_with_parser(config, Box::new(PhoneNumberBasedParser::new()))
    }

    /// Builds a policy from `config`. Fails on the first pattern that is not
    /// a valid regex.
    pub fn from_config_with_parser(
        config: PolicyConfig,
        parser: Box<dyn NumberParser>,
    ) -> Result<Self> {
        let PolicyConfig { default_country, include_defaults, policies } = config;
        let mut instance = if include_defaults {
            Self::with_parser(parser, default_country)
        } else {
            Self::empty(parser, default_country)
        };
        for (country, pattern) in policies {
            instance.add_or_replace_policy_str(country, &pattern)?;
        }
        Ok(instance)
    }

    pub fn default_country(&self) -> &str {
        &self.default_country
    }

    /// Parses `raw` using the configured default country as region hint.
    pub fn parse(&self, raw: &str) -> Option<String> {
        self.parse_for_region(raw, &self.default_country)
    }

    /// Returns the E.164 form of `raw` if the parser accepts it and, when the
    /// detected country has a policy, the E.164 form fully matches it.
    pub fn parse_for_region(&self, raw: &str, default_country: &str) -> Option<String> {
        self.parse_with_reason(raw, default_country).ok()
    }

    /// Same as [`ValidationPolicy::parse_for_region`] but tells why a number
    /// was rejected.
    pub fn parse_with_reason(
        &self,
        raw: &str,
        default_country: &str,
    ) -> std::result::Result<String, InvalidNumberError> {
        let parsed = self.parser.parse_number(raw, default_country).map_err(|err| {
            trace!("Could not parse {}: {}", raw, err);
            InvalidNumberError::from(err)
        })?;
        if !parsed.valid {
            trace!("Parser reported {} as invalid", raw);
            return Err(InvalidNumberError::Invalid);
        }
        let Some(e164) = parsed.e164 else {
            trace!("Parser gave no E.164 form for {}", raw);
            return Err(InvalidNumberError::MissingE164);
        };

        if let Some(country) = parsed.country {
            if let Some(pattern) = self.policies.get(&country) {
                if !pattern.full_match(&e164) {
                    trace!("{} rejected by {} policy {}", e164, country, pattern);
                    return Err(InvalidNumberError::PolicyMismatch { country, number: e164 });
                }
            }
        }
        Ok(e164)
    }

    /// Checks `raw` against the policy of `country`, which also serves as the
    /// region hint.
    ///
    /// # Errors
    /// [`PolicyError::UnknownPolicyCountry`] if `country` has no policy, no
    /// matter what `raw` contains.
    pub fn validate(&self, raw: &str, country: &str) -> Result<bool> {
        if !self.policies.contains_key(country) {
            return Err(PolicyError::UnknownPolicyCountry(country.to_owned()));
        }
        Ok(self.parse_for_region(raw, country).is_some())
    }

    pub fn add_or_replace_policy(&mut self, country: impl Into<String>, pattern: PolicyPattern) {
        let country = country.into();
        debug!("Setting policy for {} to {}", country, pattern);
        if self.policies.insert(country, pattern).is_some() {
            self.prune_pattern_cache();
        }
    }

    /// Compiles `pattern` and registers it for `country`. The table is left
    /// untouched if the pattern is not a valid regex.
    pub fn add_or_replace_policy_str(
        &mut self,
        country: impl Into<String>,
        pattern: &str,
    ) -> Result<()> {
        let compiled = self.pattern_cache.get_pattern(pattern)?;
        self.add_or_replace_policy(country, compiled);
        Ok(())
    }

    /// Removes the policy for `country`. Removing an absent country is not an
    /// error; `None` is returned.
    pub fn remove_policy(&mut self, country: &str) -> Option<PolicyPattern> {
        let removed = self.policies.remove(country);
        if removed.is_some() {
            debug!("Removed policy for {}", country);
            self.prune_pattern_cache();
        }
        removed
    }

    /// Snapshot of the table. Changes to the returned map do not affect the
    /// policy.
    pub fn list_policies(&self) -> BTreeMap<String, PolicyPattern> {
        self.policies
            .iter()
            .map(|(country, pattern)| (country.clone(), pattern.clone()))
            .collect()
    }

    pub fn policy_for(&self, country: &str) -> Option<&PolicyPattern> {
        self.policies.get(country)
    }

    pub fn has_policy(&self, country: &str) -> bool {
        self.policies.contains_key(country)
    }

    /// Drops compiled patterns no country uses anymore.
    fn prune_pattern_cache(&self) {
        self.pattern_cache
            .retain(|source| self.policies.values().any(|pattern| pattern.as_str() == source));
    }

    #[cfg(test)]
    pub(crate) fn cached_pattern_count(&self) -> usize {
        self.pattern_cache.len()
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::new()
    }
}
