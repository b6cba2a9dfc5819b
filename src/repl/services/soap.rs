//! # SOAP Envelope
//!
//! Builds request documents for the calculator service and pulls result
//! fields back out of its responses.

use crate::error::{CalcError, CalcResult};
use anyhow::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::Cursor;

/// Namespace of the SOAP 1.1 envelope
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Namespace of the calculator operations, also the SOAPAction prefix
pub const OPERATION_NS: &str = "http://tempuri.org/";

const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";

/// Content type sent with every request
pub const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Name of the header carrying the action URI
pub const SOAP_ACTION_HEADER: &str = "SOAPAction";

/// Operations exposed by the remote calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteOperation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl RemoteOperation {
    /// Map an operator symbol to its remote operation
    pub fn from_symbol(symbol: char) -> CalcResult<Self> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            other => Err(CalcError::UnsupportedOperation(other)),
        }
    }

    /// Operation element name on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Value of the SOAPAction header
    pub fn soap_action(&self) -> String {
        format!("{OPERATION_NS}{}", self.name())
    }

    /// Name of the element holding the result in the response
    pub fn result_element(&self) -> String {
        format!("{}Result", self.name())
    }
}

impl std::fmt::Display for RemoteOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the request envelope for `operation` with operands `a` and `b`
///
/// Operands are written as given; only XML escaping is applied.
pub fn build_envelope(operation: RemoteOperation, a: &str, b: &str) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("soap:Envelope").with_attributes([
        ("xmlns:xsi", XSI_NS),
        ("xmlns:xsd", XSD_NS),
        ("xmlns:soap", SOAP_ENVELOPE_NS),
    ])))?;
    writer.write_event(Event::Start(BytesStart::new("soap:Body")))?;
    writer.write_event(Event::Start(
        BytesStart::new(operation.name()).with_attributes([("xmlns", OPERATION_NS)]),
    ))?;

    for (field, value) in [("intA", a), ("intB", b)] {
        writer.write_event(Event::Start(BytesStart::new(field)))?;
        writer.write_event(Event::Text(BytesText::new(value)))?;
        writer.write_event(Event::End(BytesEnd::new(field)))?;
    }

    writer.write_event(Event::End(BytesEnd::new(operation.name())))?;
    writer.write_event(Event::End(BytesEnd::new("soap:Body")))?;
    writer.write_event(Event::End(BytesEnd::new("soap:Envelope")))?;

    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Find the text of the first element whose local name is `local_name`
///
/// Returns `Ok(None)` when no such element exists. Text is returned
/// unescaped but otherwise unmodified.
pub fn find_element_text(xml: &str, local_name: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let target = local_name.as_bytes();
    let mut depth = 0usize;
    let mut content = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if depth > 0 {
                    depth += 1;
                } else if e.local_name().as_ref() == target {
                    depth = 1;
                }
            }
            Event::Empty(e) => {
                if depth == 0 && e.local_name().as_ref() == target {
                    return Ok(Some(String::new()));
                }
            }
            Event::Text(e) => {
                if depth > 0 {
                    content.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if depth > 0 {
                    content.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                if depth > 0 {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(Some(content));
                    }
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Extract the `<Operation>Result` field from a response document
pub fn extract_result(operation: RemoteOperation, xml: &str) -> CalcResult<String> {
    let expected = operation.result_element();
    match find_element_text(xml, &expected) {
        Ok(Some(text)) => Ok(text),
        Ok(None) => Err(CalcError::MalformedResponse { expected }),
        Err(e) => {
            tracing::warn!("Unparsable SOAP response for {}: {}", operation, e);
            Err(CalcError::MalformedResponse { expected })
        }
    }
}

/// Extract the `faultstring` of a SOAP fault, if the body carries one
pub fn extract_fault(xml: &str) -> Option<String> {
    find_element_text(xml, "faultstring")
        .ok()
        .flatten()
        .map(|fault| fault.trim().to_string())
        .filter(|fault| !fault.is_empty())
}
