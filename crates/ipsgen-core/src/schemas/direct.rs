use super::{AddressBinding, ContentRule, FieldSource, SchemaBinding};

/// Direct manifests: snake_case headers, per-record weight unit and
/// currency, class code from the carrier service column, Jersey origin.
pub(super) const BINDING: SchemaBinding = SchemaBinding {
    name: "DIRECT",
    tracking_number: "tracking_number",
    weight_value: "weight_value",
    weight_unit: FieldSource::Header("weight_unit"),
    declared_value: "total_price_value",
    currency: FieldSource::Header("total_price_currency_code"),
    class_code: FieldSource::Header("carrier_service_class_code"),
    content: ContentRule {
        field: "export_reason",
        documents_value: "documents",
    },
    arrangement_id: "arrangement_id",
    origin_country: "JE",
    destination_country: "to_country_code",
    origin_office: "orig_office_code",
    addressee: AddressBinding {
        name: "to_given_name",
        address_line: "to_address_line_1",
        city: "to_locality",
        postal_code: "to_postal_code",
        country_sub_entity: FieldSource::Header("to_country_code"),
        phone: "to_phone",
    },
    sender: AddressBinding {
        name: "from_given_name",
        address_line: "from_address_line_1",
        city: "from_locality",
        postal_code: "from_postal_code",
        country_sub_entity: FieldSource::Header("from_country_code"),
        phone: "from_phone",
    },
};
