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

use std::{fmt, sync::Arc};

use regex::Regex;
use regex_syntax::hir::{Hir, Look};

use crate::regexp_cache::InvalidRegexError;

/// Acceptance pattern stored in the policy table.
///
/// Keeps the regex exactly as the caller supplied it (this is what listings
/// show and what equality compares) next to an anchored copy, so
/// [`PolicyPattern::full_match`] only accepts a match spanning the whole input
/// even when the source pattern has no `^`/`$` of its own.
#[derive(Clone)]
pub struct PolicyPattern {
    source: Arc<Regex>,
    anchored: Arc<Regex>,
}

impl PolicyPattern {
    pub fn new(pattern: &str) -> Result<Self, InvalidRegexError> {
        Self::from_regex(Regex::new(pattern)?)
    }

    pub fn from_regex(regex: Regex) -> Result<Self, InvalidRegexError> {
        let anchored = Regex::new(&anchored_source(regex.as_str())?)?;
        Ok(Self {
            source: Arc::new(regex),
            anchored: Arc::new(anchored),
        })
    }

    /// Eq of C fullMatch
    pub fn full_match(&self, s: &str) -> bool {
        self.anchored.is_match(s)
    }

    /// Pattern text as it was registered.
    pub fn as_str(&self) -> &str {
        self.source.as_str()
    }

    pub(crate) fn shares_compiled(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
    }
}

/// Wraps the parsed pattern between start and end of text assertions.
///
/// Works on the syntax tree, not the text: a `(?x)` pattern ending in a
/// `# comment` would swallow anything appended to its source.
fn anchored_source(pattern: &str) -> Result<String, InvalidRegexError> {
    let hir = regex_syntax::Parser::new().parse(pattern)?;
    Ok(Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]).to_string())
}

impl TryFrom<Regex> for PolicyPattern {
    type Error = InvalidRegexError;

    fn try_from(value: Regex) -> Result<Self, Self::Error> {
        Self::from_regex(value)
    }
}

impl TryFrom<&str> for PolicyPattern {
    type Error = InvalidRegexError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq for PolicyPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for PolicyPattern {}

impl fmt::Debug for PolicyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PolicyPattern").field(&self.as_str()).finish()
    }
}

impl fmt::Display for PolicyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
