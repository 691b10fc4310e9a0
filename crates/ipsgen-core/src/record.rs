use std::collections::HashMap;

use csv::StringRecord;

use crate::errors::MapError;

/// Header-name to column-position lookup, built once per manifest file.
///
/// Header matching is exact: case and punctuation sensitive, no trimming.
#[derive(Debug, Clone)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn new(headers: &StringRecord) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.to_string(), idx))
            .collect();
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// One data row viewed through the header index.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    index: &'a HeaderIndex,
    values: &'a StringRecord,
}

impl<'a> Row<'a> {
    pub fn new(index: &'a HeaderIndex, values: &'a StringRecord) -> Self {
        Self { index, values }
    }

    /// Required-key lookup. A header absent from the file and a cell
    /// absent from a short row are both mapping errors, never defaults.
    pub fn require(&self, field: &'static str) -> Result<&'a str, MapError> {
        let position = self
            .index
            .positions
            .get(field)
            .ok_or(MapError::FieldMissing { field })?;
        self.values
            .get(*position)
            .ok_or(MapError::FieldMissing { field })
    }

    /// As [`Row::require`], additionally rejecting blank values. Used for
    /// fields that feed identifiers, where an empty string must not be
    /// silently carried into output.
    pub fn require_non_empty(&self, field: &'static str) -> Result<&'a str, MapError> {
        let value = self.require(field)?;
        if value.trim().is_empty() {
            return Err(MapError::FieldMissing { field });
        }
        Ok(value)
    }
}
