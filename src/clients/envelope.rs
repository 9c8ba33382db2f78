//! Sobre SOAP 1.1
//!
//! Convierte el documento de petición (JSON) en el XML del sobre y el XML de
//! la respuesta de vuelta en JSON. Solo se tiene en cuenta el nombre local de
//! cada elemento; los prefijos de namespace de la respuesta se ignoran.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use serde_json::{Map, Value};

use super::soap_transport::TransportError;

pub const SOAP_ENV_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

fn xml_error(e: impl ToString) -> TransportError {
    TransportError::Xml(e.to_string())
}

/// Construir el sobre de `operation` con `request` como contenido
pub fn encode_envelope(namespace: &str, operation: &str, request: &Value) -> Result<String, TransportError> {
    let mut writer = Writer::new(Vec::new());

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(xml_error)?;

    let mut envelope = BytesStart::new("soap:Envelope");
    envelope.push_attribute(("xmlns:soap", SOAP_ENV_NAMESPACE));
    writer.write_event(Event::Start(envelope)).map_err(xml_error)?;
    writer
        .write_event(Event::Start(BytesStart::new("soap:Body")))
        .map_err(xml_error)?;

    let mut operation_start = BytesStart::new(operation);
    operation_start.push_attribute(("xmlns", namespace));

    match request {
        Value::Object(fields) if !fields.is_empty() => {
            writer.write_event(Event::Start(operation_start)).map_err(xml_error)?;
            for (name, value) in fields {
                write_value(&mut writer, name, value)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(operation)))
                .map_err(xml_error)?;
        }
        Value::Object(_) | Value::Null => {
            writer.write_event(Event::Empty(operation_start)).map_err(xml_error)?;
        }
        other => {
            return Err(TransportError::Xml(format!(
                "request document for {operation} must be an object, got {other}"
            )))
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new("soap:Body")))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new("soap:Envelope")))
        .map_err(xml_error)?;

    String::from_utf8(writer.into_inner()).map_err(xml_error)
}

fn write_value(writer: &mut Writer<Vec<u8>>, name: &str, value: &Value) -> Result<(), TransportError> {
    match value {
        Value::Null => Ok(()),
        Value::Array(items) => {
            for item in items {
                write_value(writer, name, item)?;
            }
            Ok(())
        }
        Value::Object(fields) => {
            writer
                .write_event(Event::Start(BytesStart::new(name)))
                .map_err(xml_error)?;
            for (child, child_value) in fields {
                write_value(writer, child, child_value)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(xml_error)
        }
        Value::Bool(flag) => write_text(writer, name, if *flag { "true" } else { "false" }),
        Value::Number(number) => write_text(writer, name, &number.to_string()),
        Value::String(text) => write_text(writer, name, text),
    }
}

fn write_text(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<(), TransportError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_error)
}

/// Elemento en construcción mientras se lee la respuesta
#[derive(Debug, Default)]
struct Node {
    name: String,
    nil: bool,
    text: String,
    children: Vec<(String, Value)>,
}

impl Node {
    fn open(start: &BytesStart<'_>) -> Result<Self, TransportError> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut nil = false;
        for attribute in start.attributes() {
            let attribute = attribute.map_err(xml_error)?;
            if attribute.key.local_name().as_ref() == b"nil" && attribute.value.as_ref() == b"true" {
                nil = true;
            }
        }
        Ok(Self {
            name,
            nil,
            ..Self::default()
        })
    }

    fn into_value(self) -> (String, Value) {
        if !self.children.is_empty() {
            let mut object = Map::new();
            for (name, value) in self.children {
                match object.get_mut(&name) {
                    Some(Value::Array(items)) => items.push(value),
                    Some(existing) => {
                        let first = existing.take();
                        *existing = Value::Array(vec![first, value]);
                    }
                    None => {
                        object.insert(name, value);
                    }
                }
            }
            return (self.name, Value::Object(object));
        }

        if self.nil || self.text.is_empty() {
            (self.name, Value::Null)
        } else {
            (self.name, Value::String(self.text))
        }
    }
}

/// Leer un documento XML completo como árbol JSON con su elemento raíz
fn parse_document(xml: &str) -> Result<(String, Value), TransportError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<Node> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(start) => stack.push(Node::open(&start)?),
            Event::Empty(start) => {
                let (name, value) = Node::open(&start)?.into_value();
                match stack.last_mut() {
                    Some(parent) => parent.children.push((name, value)),
                    None => root = Some((name, value)),
                }
            }
            Event::Text(text) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&text.unescape().map_err(xml_error)?);
                }
            }
            Event::CData(data) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| TransportError::Xml("unbalanced end tag".to_string()))?;
                let (name, value) = node.into_value();
                match stack.last_mut() {
                    Some(parent) => parent.children.push((name, value)),
                    None => root = Some((name, value)),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(TransportError::Xml("unexpected end of document".to_string()));
    }
    root.ok_or(TransportError::MissingBody)
}

/// Extraer el contenido de la respuesta de operación del sobre
///
/// Devuelve los hijos de `<OperationResponse>` como objeto JSON. Un
/// `soap:Fault` se convierte en `TransportError::Fault`.
pub fn decode_envelope(xml: &str) -> Result<Value, TransportError> {
    let (root_name, root) = parse_document(xml)?;
    if root_name != "Envelope" {
        return Err(TransportError::Xml(format!(
            "expected SOAP Envelope, got {root_name}"
        )));
    }

    let body = root
        .get("Body")
        .and_then(Value::as_object)
        .ok_or(TransportError::MissingBody)?;

    if let Some(fault) = body.get("Fault") {
        return Err(fault_error(fault));
    }

    let (_, response) = body.iter().next().ok_or(TransportError::MissingBody)?;
    match response {
        Value::Object(_) => Ok(response.clone()),
        _ => Ok(Value::Object(Map::new())),
    }
}

fn fault_error(fault: &Value) -> TransportError {
    let field = |name: &str| {
        fault
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    TransportError::Fault {
        code: field("faultcode"),
        message: field("faultstring"),
    }
}
