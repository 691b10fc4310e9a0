use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::errors::{ConvertError, MapError, Result};
use crate::mapper::map_record;
use crate::record::{HeaderIndex, Row};
use crate::schemas::SchemaVariant;
use crate::xml;

/// One serialized IPS document, named and ready for the caller to
/// persist. Written once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// A record that failed to map, retained under [`FailurePolicy::Collect`].
#[derive(Debug)]
pub struct RecordFailure {
    pub offset: usize,
    pub error: MapError,
}

#[derive(Debug, Default)]
pub struct FileOutcome {
    pub artifacts: Vec<OutputArtifact>,
    pub failures: Vec<RecordFailure>,
}

/// What to do when a single record fails to map.
///
/// `Abort` stops the file at the first bad record; `Collect` converts the
/// remaining records and reports the failures alongside the artifacts.
/// Serialization failures abort either way, they indicate a core bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    #[default]
    Abort,
    Collect,
}

/// Per-file conversion pipeline: parse the manifest, map each record,
/// serialize, name. Holds no mutable state between invocations and is
/// safe to run concurrently for distinct files.
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    variant: SchemaVariant,
    policy: FailurePolicy,
}

impl Converter {
    pub fn new(variant: SchemaVariant) -> Self {
        Self {
            variant,
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn variant(&self) -> SchemaVariant {
        self.variant
    }

    /// Converts one manifest file's raw bytes into named XML artifacts,
    /// in record order. Stamps each record with the wall clock at
    /// conversion time.
    pub fn process(&self, filename: &str, raw: &[u8]) -> Result<FileOutcome> {
        self.process_with_clock(filename, raw, Utc::now)
    }

    /// As [`Converter::process`] with an injectable clock. The clock is
    /// sampled once per record and feeds both the item event timestamp
    /// and the artifact name.
    pub fn process_with_clock<C>(
        &self,
        filename: &str,
        raw: &[u8],
        mut clock: C,
    ) -> Result<FileOutcome>
    where
        C: FnMut() -> DateTime<Utc>,
    {
        let text = std::str::from_utf8(raw).map_err(|_| ConvertError::Parse {
            file: filename.to_string(),
            message: "content is not valid UTF-8".to_string(),
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|source| ConvertError::Csv {
                file: filename.to_string(),
                source,
            })?
            .clone();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(ConvertError::Parse {
                file: filename.to_string(),
                message: "header row is absent or empty".to_string(),
            });
        }

        let index = HeaderIndex::new(&headers);
        let binding = self.variant.binding();

        let mut outcome = FileOutcome::default();
        let mut used_names = HashSet::new();

        for (offset, record) in reader.records().enumerate() {
            let values = record.map_err(|source| ConvertError::Csv {
                file: filename.to_string(),
                source,
            })?;
            let row = Row::new(&index, &values);
            let now = clock();

            let item = match map_record(binding, &row, now) {
                Ok(item) => item,
                Err(error) => match self.policy {
                    FailurePolicy::Abort => {
                        return Err(ConvertError::Record {
                            file: filename.to_string(),
                            offset,
                            source: error,
                        });
                    }
                    FailurePolicy::Collect => {
                        tracing::warn!(file = filename, offset, %error, "record skipped");
                        outcome.failures.push(RecordFailure { offset, error });
                        continue;
                    }
                },
            };

            let bytes = xml::serialize(&item).map_err(|source| ConvertError::Serialize {
                file: filename.to_string(),
                offset,
                source,
            })?;
            let name = artifact_name(&now, &item.item_id, offset, &mut used_names);
            outcome.artifacts.push(OutputArtifact { name, bytes });
        }

        tracing::debug!(
            file = filename,
            schema = %self.variant,
            produced = outcome.artifacts.len(),
            skipped = outcome.failures.len(),
            "manifest converted"
        );
        Ok(outcome)
    }
}

/// `<YYYYMMDDHHMMSS>_<itemId>.xml`, stamped with the record's conversion
/// time. Two records landing on the same second with the same tracking
/// number would collide, so the record offset disambiguates repeats
/// within one invocation.
fn artifact_name(
    now: &DateTime<Utc>,
    item_id: &str,
    offset: usize,
    used: &mut HashSet<String>,
) -> String {
    let stamp = now.format("%Y%m%d%H%M%S");
    let name = format!("{stamp}_{item_id}.xml");
    if used.insert(name.clone()) {
        return name;
    }
    let disambiguated = format!("{stamp}_{item_id}_{offset}.xml");
    used.insert(disambiguated.clone());
    disambiguated
}
