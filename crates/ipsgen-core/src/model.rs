use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed IPS declaration constants shared by every manifest schema.
pub const DUTIABLE_INDICATOR: &str = "D";
pub const POSTAL_STATUS_CODE: &str = "MINL";
pub const EVENT_TYPE_CODE: &str = "EventEMA";
pub const CUSTOMS_REFERENCE_PREFIX: &str = "ARGMT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentCode {
    Documents,
    Merchandise,
}

impl ContentCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentCode::Documents => "D",
            ContentCode::Merchandise => "M",
        }
    }
}

/// One address block of a mail item.
///
/// The free-text fields (`name`, `address_line`, `city`, `postal_code`)
/// are stored already XML-entity-escaped; `country_sub_entity` and
/// `phone` pass through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBlock {
    pub name: String,
    pub address_line: String,
    pub city: String,
    pub postal_code: String,
    pub country_sub_entity: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEvent {
    pub event_type: String,
    pub timestamp: DateTime<Utc>,
    pub office_code: String,
}

/// Canonical representation of one shipment record, one per output XML
/// document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailItem {
    pub item_id: String,
    pub weight_kg: f64,
    pub declared_value: String,
    pub currency_code: String,
    pub dutiable_indicator: String,
    pub class_code: String,
    pub content_code: ContentCode,
    pub customs_reference: String,
    pub origin_country: String,
    pub destination_country: String,
    pub postal_status: String,
    pub addressee: AddressBlock,
    pub sender: AddressBlock,
    pub event: ItemEvent,
}
