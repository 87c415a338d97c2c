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

use strum::EnumIter;

use crate::i18n::RegionCode;

/// Country used as the region hint when the caller does not give one.
pub const DEFAULT_COUNTRY: &str = "US";

/// Entries a freshly constructed policy table starts with.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultPolicy {
    /// **United States.** `+1` and ten national digits.
    UnitedStates,
    /// **United Kingdom.** `+44` and ten national digits.
    UnitedKingdom,
    /// **Ukraine.** `+380` and nine national digits.
    Ukraine,
    /// **France.** `+33` and nine national digits.
    France,
    /// **Germany.** `+49` and ten or eleven national digits.
    Germany,
}

impl DefaultPolicy {
    /// Policy table key.
    pub fn country_code(self) -> &'static str {
        match self {
            DefaultPolicy::UnitedStates => RegionCode::us(),
            DefaultPolicy::UnitedKingdom => RegionCode::uk(),
            DefaultPolicy::Ukraine => RegionCode::ua(),
            DefaultPolicy::France => RegionCode::fr(),
            DefaultPolicy::Germany => RegionCode::de(),
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            DefaultPolicy::UnitedStates => r"^\+1\d{10}$",
            DefaultPolicy::UnitedKingdom => r"^\+44\d{10}$",
            DefaultPolicy::Ukraine => r"^\+380\d{9}$",
            DefaultPolicy::France => r"^\+33\d{9}$",
            DefaultPolicy::Germany => r"^\+49\d{10,11}$",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::DefaultPolicy;
    use crate::policy_pattern::PolicyPattern;

    #[test]
    fn default_patterns_compile() {
        for policy in DefaultPolicy::iter() {
            assert!(
                PolicyPattern::new(policy.pattern()).is_ok(),
                "pattern for {} must compile", policy.country_code()
            );
        }
    }

    #[test]
    fn country_codes_are_unique() {
        let codes: HashSet<_> = DefaultPolicy::iter().map(DefaultPolicy::country_code).collect();
        assert_eq!(codes.len(), DefaultPolicy::iter().count());
        assert_eq!(codes, HashSet::from(["US", "UK", "UA", "FR", "DE"]));
    }
}
