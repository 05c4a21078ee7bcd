//! checkVat SOAP request envelope generation.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use super::soap_ns;
use crate::core::CheckError;

fn xml_io(e: std::io::Error) -> CheckError {
    CheckError::Xml(format!("XML write error: {e}"))
}

struct EnvelopeWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl EnvelopeWriter {
    fn new() -> Result<Self, CheckError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(Self { writer })
    }

    fn into_string(self) -> Result<String, CheckError> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| CheckError::Xml(format!("XML UTF-8 error: {e}")))
    }

    fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, CheckError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(xml_io)?;
        Ok(self)
    }

    fn start_element(&mut self, name: &str) -> Result<&mut Self, CheckError> {
        self.start_element_with_attrs(name, &[])
    }

    fn end_element(&mut self, name: &str) -> Result<&mut Self, CheckError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    fn empty_element(&mut self, name: &str) -> Result<&mut Self, CheckError> {
        self.writer
            .write_event(Event::Empty(BytesStart::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    /// Element text goes through `BytesText`, so XML-special characters in
    /// caller input are escaped on the way out.
    fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, CheckError> {
        self.start_element(name)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)?;
        self.end_element(name)
    }
}

/// Build the SOAP envelope for a checkVat request.
///
/// `country_code` and `vat_number` are embedded as element text; both are
/// expected to be pre-validated, but escaping happens regardless.
pub fn build_check_vat_envelope(
    country_code: &str,
    vat_number: &str,
) -> Result<String, CheckError> {
    let mut w = EnvelopeWriter::new()?;

    w.start_element_with_attrs(
        "soapenv:Envelope",
        &[
            ("xmlns:soapenv", soap_ns::ENVELOPE),
            ("xmlns:urn", soap_ns::CHECK_VAT_TYPES),
        ],
    )?;
    w.empty_element("soapenv:Header")?;
    w.start_element("soapenv:Body")?;
    w.start_element("urn:checkVat")?;
    w.text_element("urn:countryCode", country_code)?;
    w.text_element("urn:vatNumber", vat_number)?;
    w.end_element("urn:checkVat")?;
    w.end_element("soapenv:Body")?;
    w.end_element("soapenv:Envelope")?;

    w.into_string()
}
