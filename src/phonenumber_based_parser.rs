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

use log::{trace, warn};
use phonenumber::{country, Mode};

use crate::{
    interfaces::{NumberParser, ParsedNumber},
    policy::errors::ParseNumberError,
};

/// [`NumberParser`] backed by the `phonenumber` crate metadata.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhoneNumberBasedParser;

impl PhoneNumberBasedParser {
    pub fn new() -> Self {
        Self
    }

    fn region_for_hint(region_hint: &str) -> Option<country::Id> {
        if region_hint.is_empty() {
            return None;
        }
        match region_hint.parse::<country::Id>() {
            Ok(id) => Some(id),
            Err(_) => {
                // Numbers without a leading plus cannot be parsed without a region.
                warn!("Unknown region hint {}, parsing without one", region_hint);
                None
            }
        }
    }
}

impl NumberParser for PhoneNumberBasedParser {
    fn parse_number(&self, text: &str, region_hint: &str) -> Result<ParsedNumber, ParseNumberError> {
        if text.trim().is_empty() {
            return Err(ParseNumberError::Empty);
        }
        let region = Self::region_for_hint(region_hint);
        let number = phonenumber::parse(region, text)
            .map_err(|err| ParseNumberError::FailedToParse(err.to_string()))?;

        let valid = phonenumber::is_valid(&number);
        // Id variants are named by their ISO 3166 code.
        let country = number.country().id().map(|id| format!("{:?}", id));
        let e164 = number.format().mode(Mode::E164).to_string();
        trace!(
            "Parsed {} with hint {}: e164={}, country={:?}, valid={}",
            text, region_hint, e164, country, valid
        );

        Ok(ParsedNumber {
            valid,
            country,
            e164: Some(e164).filter(|s| !s.is_empty()),
        })
    }
}
