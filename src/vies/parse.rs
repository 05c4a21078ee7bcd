//! checkVat response parsing.
//!
//! Primary strategy is a structured pass with quick-xml, matching elements
//! by local name so any namespace prefix (or none) works. If the document
//! does not parse as XML, a regex scan recovers the same fields — the EU
//! service has been observed returning variably-prefixed and occasionally
//! malformed payloads.

use quick_xml::Reader;
use quick_xml::events::Event;
use regex::Regex;
use std::sync::OnceLock;

use crate::core::VatCheckResult;

/// Parse a checkVat response body into a [`VatCheckResult`].
///
/// Infallible: responses that yield no validity indicator by either
/// strategy produce `valid = false` with a "could not determine" message.
pub fn parse_check_vat_response(xml: &str) -> VatCheckResult {
    match parse_structured(xml) {
        Ok(fields) => fields.into_result(),
        Err(_) => parse_fallback(xml),
    }
}

#[derive(Default)]
struct ResponseFields {
    valid_text: Option<String>,
    name: Option<String>,
    address: Option<String>,
    fault: Option<String>,
}

impl ResponseFields {
    fn into_result(self) -> VatCheckResult {
        if let Some(fault) = self.fault {
            let fault = fault.trim();
            if !fault.is_empty() {
                return VatCheckResult::service_fault(fault);
            }
        }
        match self.valid_text {
            Some(t) => VatCheckResult::determined(
                t.trim().eq_ignore_ascii_case("true"),
                clean_field(self.name.as_deref()),
                clean_field(self.address.as_deref()),
            ),
            None => VatCheckResult::undetermined(),
        }
    }
}

/// Drop surrounding whitespace and the VIES "no data" placeholder.
fn clean_field(value: Option<&str>) -> Option<String> {
    let t = value?.trim();
    if t.is_empty() || t == "---" {
        return None;
    }
    Some(t.to_string())
}

fn local_name(qname: &str) -> &str {
    match qname.split_once(':') {
        Some((_, local)) => local,
        None => qname,
    }
}

fn parse_structured(xml: &str) -> Result<ResponseFields, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut fields = ResponseFields::default();
    let mut path: Vec<String> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                let name = std::str::from_utf8(e.name().as_ref())
                    .unwrap_or("")
                    .to_string();
                path.push(local_name(&name).to_string());
            }
            Event::Text(ref e) => {
                let text = e.unescape().unwrap_or_default();
                if !text.is_empty() {
                    record_text(&path, &text, &mut fields);
                }
            }
            Event::End(_) => {
                path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(fields)
}

fn record_text(path: &[String], text: &str, fields: &mut ResponseFields) {
    let Some(parent) = path.last() else { return };

    if parent == "faultstring" {
        fields.fault.get_or_insert_with(String::new).push_str(text);
        return;
    }

    // name/valid/address are only meaningful inside checkVatResponse,
    // which may be nested anywhere below the document root.
    if !path.iter().any(|p| p == "checkVatResponse") {
        return;
    }

    let slot = match parent.as_str() {
        "valid" => &mut fields.valid_text,
        "name" => &mut fields.name,
        "address" => &mut fields.address,
        _ => return,
    };
    slot.get_or_insert_with(String::new).push_str(text);
}

fn valid_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"<(?:[A-Za-z0-9]+:)?valid\s*>\s*((?i:true|false))\s*<")
            .expect("hard-coded regex")
    })
}

fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<(?:[A-Za-z0-9]+:)?name\s*>(.*?)</").expect("hard-coded regex"))
}

fn address_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)<(?:[A-Za-z0-9]+:)?address\s*>(.*?)</").expect("hard-coded regex")
    })
}

fn fault_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)<(?:[A-Za-z0-9]+:)?faultstring\s*>(.*?)</").expect("hard-coded regex")
    })
}

fn parse_fallback(xml: &str) -> VatCheckResult {
    let mut fields = ResponseFields::default();
    if let Some(c) = fault_re().captures(xml) {
        fields.fault = Some(c[1].to_string());
    }
    if let Some(c) = valid_re().captures(xml) {
        fields.valid_text = Some(c[1].to_string());
    }
    if let Some(c) = name_re().captures(xml) {
        fields.name = Some(c[1].to_string());
    }
    if let Some(c) = address_re().captures(xml) {
        fields.address = Some(c[1].to_string());
    }
    fields.into_result()
}
