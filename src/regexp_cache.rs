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

use dashmap::DashMap;
use thiserror::Error;

use crate::policy_pattern::PolicyPattern;

#[derive(Debug, Error)]
pub enum InvalidRegexError {
    #[error("An error occurred while trying to create regex: {0}")]
    Compile(#[from] regex::Error),
    #[error("An error occurred while trying to parse regex: {0}")]
    Syntax(#[from] regex_syntax::Error),
}

/// Compiled policy patterns keyed by their source text.
///
/// Several countries commonly share one pattern (all of NANPA for example),
/// so registering a pattern string twice hands out the same compiled regex.
/// Entries live until [`PatternCache::retain`] drops them.
pub struct PatternCache {
    cache: DashMap<String, PolicyPattern>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_pattern(&self, pattern: &str) -> Result<PolicyPattern, InvalidRegexError> {
        if let Some(compiled) = self.cache.get(pattern) {
            return Ok(compiled.value().clone());
        }
        let entry = self
            .cache
            .entry(pattern.to_owned())
            .or_try_insert_with(|| PolicyPattern::new(pattern))?;
        Ok(entry.value().clone())
    }

    /// Keeps only the patterns whose source text satisfies `in_use`.
    pub fn retain(&self, in_use: impl Fn(&str) -> bool) {
        self.cache.retain(|source, _| in_use(source));
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}
