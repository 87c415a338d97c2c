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

use super::default_policy::DEFAULT_COUNTRY;

/// Construction-time settings for [`super::ValidationPolicy::from_config`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct PolicyConfig {
    /// Region hint used by `parse` when no country is passed explicitly.
    pub default_country: String,
    /// Start from the [`super::DefaultPolicy`] table (default: on).
    pub include_defaults: bool,
    /// Extra `(country, pattern)` entries. Applied after the defaults, so an
    /// entry here replaces a default with the same key.
    pub policies: Vec<(String, String)>,
}

impl PolicyConfig {
    pub fn new(default_country: impl Into<String>) -> Self {
        Self {
            default_country: default_country.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn without_defaults(mut self) -> Self {
        self.include_defaults = false;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, country: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.policies.push((country.into(), pattern.into()));
        self
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            default_country: DEFAULT_COUNTRY.to_owned(),
            include_defaults: true,
            policies: Vec::new(),
        }
    }
}
