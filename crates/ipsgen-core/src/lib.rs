pub mod errors;
pub mod mapper;
pub mod model;
pub mod pipeline;
pub mod record;
pub mod schemas;
pub mod units;
pub mod xml;

pub use errors::{ConvertError, MapError, UnsupportedUnit, XmlError};
pub use model::{AddressBlock, ContentCode, ItemEvent, MailItem};
pub use pipeline::{Converter, FailurePolicy, FileOutcome, OutputArtifact, RecordFailure};
pub use schemas::{SchemaBinding, SchemaVariant};
pub use units::MassUnit;
