use chrono::SecondsFormat;
use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::errors::XmlError;
use crate::model::{AddressBlock, MailItem};

pub const IPS_NAMESPACE: &str = "http://upu.int/ips";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// The downstream IPS import requires the byte-order mark; it is part of
/// the output contract, not decoration.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

pub(crate) fn escape_text(raw: &str) -> String {
    escape(raw).into_owned()
}

/// Serializes one mail item as a standalone `ips` document: BOM, XML
/// declaration, then the `MailItem` element with children in fixed order
/// so golden-file comparisons stay stable.
///
/// Text nodes are written pass-through; the mapper owns escaping.
pub fn serialize(item: &MailItem) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(1024);
    buf.extend_from_slice(UTF8_BOM);

    let mut writer = Writer::new(&mut buf);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("ips");
    root.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
    root.push_attribute(("xmlns", IPS_NAMESPACE));
    writer.write_event(Event::Start(root))?;

    let mut mail_item = BytesStart::new("MailItem");
    mail_item.push_attribute(("ItemId", item.item_id.as_str()));
    writer.write_event(Event::Start(mail_item))?;

    text_element(&mut writer, "ItemWeight", &item.weight_kg.to_string())?;
    text_element(&mut writer, "Value", &item.declared_value)?;
    text_element(&mut writer, "CurrencyCd", &item.currency_code)?;
    text_element(&mut writer, "DutiableInd", &item.dutiable_indicator)?;
    text_element(&mut writer, "ClassCd", &item.class_code)?;
    text_element(&mut writer, "Content", item.content_code.as_str())?;
    text_element(&mut writer, "CustomNo", &item.customs_reference)?;
    text_element(&mut writer, "OrigCountryCd", &item.origin_country)?;
    text_element(&mut writer, "DestCountryCd", &item.destination_country)?;
    text_element(&mut writer, "PostalStatusFcd", &item.postal_status)?;

    address_block(&mut writer, "Addressee", &item.addressee)?;
    address_block(&mut writer, "Sender", &item.sender)?;

    writer.write_event(Event::Start(BytesStart::new("ItemEvent")))?;
    text_element(&mut writer, "TNCd", &item.event.event_type)?;
    text_element(
        &mut writer,
        "Date",
        &item
            .event
            .timestamp
            .to_rfc3339_opts(SecondsFormat::Micros, true),
    )?;
    text_element(&mut writer, "OfficeCd", &item.event.office_code)?;
    writer.write_event(Event::End(BytesEnd::new("ItemEvent")))?;

    writer.write_event(Event::End(BytesEnd::new("MailItem")))?;
    writer.write_event(Event::End(BytesEnd::new("ips")))?;

    Ok(buf)
}

fn address_block<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    block: &AddressBlock,
) -> Result<(), XmlError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    text_element(writer, "Name", &block.name)?;
    text_element(writer, "Address", &block.address_line)?;
    text_element(writer, "City", &block.city)?;
    text_element(writer, "Postcode", &block.postal_code)?;
    text_element(writer, "CountrySubEntity", &block.country_sub_entity)?;
    text_element(writer, "PhoneNo", &block.phone)?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    escaped: &str,
) -> Result<(), XmlError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::from_escaped(escaped)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
