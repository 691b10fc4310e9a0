use std::fmt;

mod direct;
mod reseller;

/// Where a canonical field takes its value from: a manifest column, or a
/// constant baked into the schema.
#[derive(Debug, Clone, Copy)]
pub enum FieldSource {
    Header(&'static str),
    Fixed(&'static str),
}

/// Content classification rule: the named column equals the marker value
/// for documents, anything else is merchandise.
#[derive(Debug, Clone, Copy)]
pub struct ContentRule {
    pub field: &'static str,
    pub documents_value: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct AddressBinding {
    pub name: &'static str,
    pub address_line: &'static str,
    pub city: &'static str,
    pub postal_code: &'static str,
    pub country_sub_entity: FieldSource,
    pub phone: &'static str,
}

/// Declarative field bindings for one manifest schema. The mapper is
/// generic over this table; the two carrier variants differ only in the
/// constants below.
#[derive(Debug, Clone, Copy)]
pub struct SchemaBinding {
    pub name: &'static str,
    pub tracking_number: &'static str,
    pub weight_value: &'static str,
    pub weight_unit: FieldSource,
    pub declared_value: &'static str,
    pub currency: FieldSource,
    pub class_code: FieldSource,
    pub content: ContentRule,
    pub arrangement_id: &'static str,
    pub origin_country: &'static str,
    pub destination_country: &'static str,
    pub origin_office: &'static str,
    pub addressee: AddressBinding,
    pub sender: AddressBinding,
}

/// Supported manifest schemas. Selection is made by the caller that
/// supplies the file; it is never auto-detected from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaVariant {
    Direct,
    Reseller,
}

impl SchemaVariant {
    pub fn binding(self) -> &'static SchemaBinding {
        match self {
            SchemaVariant::Direct => &direct::BINDING,
            SchemaVariant::Reseller => &reseller::BINDING,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaVariant::Direct => "direct",
            SchemaVariant::Reseller => "reseller",
        }
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
