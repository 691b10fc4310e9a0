use chrono::{DateTime, Utc};

use crate::errors::MapError;
use crate::model::{
    AddressBlock, ContentCode, ItemEvent, MailItem, CUSTOMS_REFERENCE_PREFIX, DUTIABLE_INDICATOR,
    EVENT_TYPE_CODE, POSTAL_STATUS_CODE,
};
use crate::record::Row;
use crate::schemas::{AddressBinding, FieldSource, SchemaBinding};
use crate::units::{self, MassUnit};
use crate::xml::escape_text;

/// Maps one manifest row onto the canonical mail item document.
///
/// `now` becomes the item event timestamp; it is the conversion's own
/// execution time, never a value from the input.
pub fn map_record(
    binding: &SchemaBinding,
    row: &Row<'_>,
    now: DateTime<Utc>,
) -> Result<MailItem, MapError> {
    let item_id = row.require_non_empty(binding.tracking_number)?;
    let weight_kg = map_weight(binding, row)?;
    let arrangement_id = row.require_non_empty(binding.arrangement_id)?;

    let content_raw = row.require(binding.content.field)?;
    let content_code = if content_raw == binding.content.documents_value {
        ContentCode::Documents
    } else {
        ContentCode::Merchandise
    };

    Ok(MailItem {
        item_id: item_id.to_string(),
        weight_kg,
        declared_value: row.require(binding.declared_value)?.to_string(),
        currency_code: resolve(&binding.currency, row)?.to_string(),
        dutiable_indicator: DUTIABLE_INDICATOR.to_string(),
        class_code: resolve(&binding.class_code, row)?.to_string(),
        content_code,
        customs_reference: format!("{CUSTOMS_REFERENCE_PREFIX}{}", arrangement_id.trim()),
        origin_country: binding.origin_country.to_string(),
        destination_country: row.require(binding.destination_country)?.to_string(),
        postal_status: POSTAL_STATUS_CODE.to_string(),
        addressee: map_address(&binding.addressee, row)?,
        sender: map_address(&binding.sender, row)?,
        event: ItemEvent {
            event_type: EVENT_TYPE_CODE.to_string(),
            timestamp: now,
            office_code: row.require(binding.origin_office)?.to_string(),
        },
    })
}

fn resolve<'a>(source: &FieldSource, row: &Row<'a>) -> Result<&'a str, MapError> {
    match source {
        FieldSource::Header(field) => row.require(field),
        FieldSource::Fixed(value) => Ok(value),
    }
}

fn map_weight(binding: &SchemaBinding, row: &Row<'_>) -> Result<f64, MapError> {
    let raw = row.require(binding.weight_value)?;
    // Parsing through f64 keeps "5", "5.0" and "5.00" equivalent.
    let value: f64 = raw.trim().parse().map_err(|_| MapError::InvalidValue {
        field: binding.weight_value,
        value: raw.to_string(),
        message: "expected a numeric weight".to_string(),
    })?;

    let unit = MassUnit::try_from(resolve(&binding.weight_unit, row)?)?;
    let weight_kg = units::to_kilograms(value, unit);
    if !weight_kg.is_finite() || weight_kg < 0.0 {
        return Err(MapError::InvalidValue {
            field: binding.weight_value,
            value: raw.to_string(),
            message: "weight must be a non-negative finite number".to_string(),
        });
    }
    Ok(weight_kg)
}

/// The free-text fields are entity-escaped here, once. The serializer
/// writes text nodes pass-through, so escaping at the mapping layer is
/// what guarantees no raw `<` or `&` reaches an address text node. Phone
/// numbers and country codes deliberately stay verbatim.
fn map_address(binding: &AddressBinding, row: &Row<'_>) -> Result<AddressBlock, MapError> {
    Ok(AddressBlock {
        name: escape_text(row.require(binding.name)?),
        address_line: escape_text(row.require(binding.address_line)?),
        city: escape_text(row.require(binding.city)?),
        postal_code: escape_text(row.require(binding.postal_code)?),
        country_sub_entity: resolve(&binding.country_sub_entity, row)?.to_string(),
        phone: row.require(binding.phone)?.to_string(),
    })
}
