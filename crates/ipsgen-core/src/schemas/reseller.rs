use super::{AddressBinding, ContentRule, FieldSource, SchemaBinding};

/// Reseller (Royal Mail) manifests: SHOUTING headers, weights already in
/// kilograms, sterling only, fixed class code, Great Britain origin.
pub(super) const BINDING: SchemaBinding = SchemaBinding {
    name: "RESELLER",
    tracking_number: "1D Tracking Number",
    weight_value: "ITEM WEIGHT",
    weight_unit: FieldSource::Fixed("kg"),
    declared_value: "VALUE OF CONTENTS",
    currency: FieldSource::Fixed("GBP"),
    class_code: FieldSource::Fixed("U"),
    content: ContentRule {
        field: "CATEGORY/NATURE OF ITEM",
        documents_value: "D",
    },
    arrangement_id: "arrangement_id",
    origin_country: "GB",
    destination_country: "DELIVERY COUNTRY",
    origin_office: "orig_office_code",
    addressee: AddressBinding {
        name: "RECIPIENT NAME",
        address_line: "DELIVERY ADDRESS 1",
        city: "DELIVERY POST TOWN",
        postal_code: "DELIVERY POSTCODE",
        country_sub_entity: FieldSource::Header("DELIVERY COUNTRY"),
        phone: "RECIPIENT TELEPHONE",
    },
    sender: AddressBinding {
        name: "SENDER NAME",
        address_line: "SENDER ADDRESS 1",
        city: "SENDER POST TOWN",
        postal_code: "SENDER POSTCODE",
        country_sub_entity: FieldSource::Fixed("UK"),
        phone: "SENDER TELEPHONE",
    },
};
