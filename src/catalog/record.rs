// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::error::{MatchError, Result};
use crate::types::GrantRecord;
use serde::Deserialize;

/// A grant object as it appears in the catalog file, before validation.
///
/// Both the English field names and the Swedish ones used by older
/// catalogs (`namn`, `nyckelord`) are accepted. Unknown fields are ignored.
/// A record carrying both spellings of the same field is rejected by serde as
/// a duplicate field.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct RawGrantRecord {
    #[serde(default, alias = "namn")]
    pub name: Option<String>,
    #[serde(default, alias = "nyckelord")]
    pub keywords: Option<Vec<String>>,
}

impl RawGrantRecord {
    /// Check required fields. `index` is the record's position in the file.
    ///
    /// Only an absent (or `null`) name is an error; any present string,
    /// empty included, is taken as is.
    pub fn validate(self, index: usize) -> Result<GrantRecord> {
        let Some(name) = self.name else {
            return Err(MatchError::Schema { index, field: "name" });
        };
        Ok(GrantRecord {
            name,
            keywords: self.keywords.unwrap_or_default(),
        })
    }
}
