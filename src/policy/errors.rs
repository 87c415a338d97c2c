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

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Errors caused by how the policy is used or configured, as opposed to
/// the numbers fed into it.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("No policy registered for country {0}")]
    UnknownPolicyCountry(String),
    #[error("{0}")]
    InvalidPattern(#[from] InvalidRegexError),
}

/// Reasons a number is rejected. `parse` collapses all of them into `None`.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum InvalidNumberError {
    #[error("{0}")]
    Unparseable(#[from] ParseNumberError),
    #[error("Number is not valid")]
    Invalid,
    #[error("Parser produced no E.164 representation")]
    MissingE164,
    #[error("Number {number} does not match policy for country {country}")]
    PolicyMismatch { country: String, number: String },
}

/// Failure reported by a [`crate::NumberParser`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNumberError {
    #[error("Empty input")]
    Empty,
    #[error("Failed to parse number: {0}")]
    FailedToParse(String),
}
