//! Generic XML to value-tree conversion.
//!
//! Elements become maps, siblings sharing a tag become arrays, and leaf text
//! stays string-typed. Attributes are collected under [`ATTRIBUTES_KEY`]. The
//! document element's own name is dropped; its contents are the result.
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::Map;
use serde_json::Value;

use crate::domain::GatewayError;

/// Key under which element attributes are collected.
pub const ATTRIBUTES_KEY: &str = "@attributes";
/// Key holding element text when an element mixes text with children.
pub const TEXT_KEY: &str = "#text";

struct Element {
    attributes: Map<String, Value>,
    children: Vec<(String, Value)>,
    text: String,
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> Result<Self, GatewayError> {
        let mut attributes = Map::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| GatewayError::Parse(e.to_string()))?;
            // Namespace declarations are noise for callers.
            if attr.key.as_ref().starts_with(b"xmlns") {
                continue;
            }
            let key = utf8(attr.key.local_name().as_ref())?;
            let value = attr.unescape_value()?.into_owned();
            attributes.insert(key, Value::String(value));
        }
        Ok(Element {
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    fn into_value(self) -> Value {
        if self.attributes.is_empty() && self.children.is_empty() {
            return if self.text.is_empty() {
                Value::Object(Map::new())
            } else {
                Value::String(self.text)
            };
        }
        let mut map = Map::new();
        if !self.attributes.is_empty() {
            map.insert(ATTRIBUTES_KEY.to_string(), Value::Object(self.attributes));
        }
        for (name, value) in self.children {
            match map.get_mut(&name) {
                // Repeated sibling tags collapse into an array.
                Some(Value::Array(items)) => items.push(value),
                Some(existing) => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
                None => {
                    map.insert(name, value);
                }
            }
        }
        if !self.text.is_empty() {
            map.insert(TEXT_KEY.to_string(), Value::String(self.text));
        }
        Value::Object(map)
    }
}

/// Converts an XML document into a generic value tree.
///
/// Fails with [`GatewayError::Parse`] on malformed input; never returns a
/// partial structure. Numeric-looking text is not coerced.
pub fn xml_to_value(xml: &str) -> Result<Value, GatewayError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<(String, Element)> = Vec::new();
    let mut root: Option<Value> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if root.is_some() && stack.is_empty() {
                    return Err(GatewayError::Parse(
                        "multiple document elements".to_string(),
                    ));
                }
                let name = utf8(start.local_name().as_ref())?;
                stack.push((name, Element::from_start(&start)?));
            }
            Event::Empty(start) => {
                if root.is_some() && stack.is_empty() {
                    return Err(GatewayError::Parse(
                        "multiple document elements".to_string(),
                    ));
                }
                let name = utf8(start.local_name().as_ref())?;
                let value = Element::from_start(&start)?.into_value();
                attach(&mut stack, &mut root, name, value);
            }
            Event::End(_) => {
                let (name, element) = stack
                    .pop()
                    .ok_or_else(|| GatewayError::Parse("unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, name, element.into_value());
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                match stack.last_mut() {
                    Some((_, element)) => element.text.push_str(text),
                    None => {
                        return Err(GatewayError::Parse(
                            "text outside of the document element".to_string(),
                        ))
                    }
                }
            }
            Event::CData(cdata) => {
                let bytes = cdata.into_inner();
                let text = std::str::from_utf8(&bytes)
                    .map_err(|e| GatewayError::Parse(e.to_string()))?;
                match stack.last_mut() {
                    Some((_, element)) => element.text.push_str(text),
                    None => {
                        return Err(GatewayError::Parse(
                            "text outside of the document element".to_string(),
                        ))
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(GatewayError::Parse("unexpected end of document".to_string()));
    }
    root.ok_or_else(|| GatewayError::Parse("no document element".to_string()))
}

fn attach(
    stack: &mut Vec<(String, Element)>,
    root: &mut Option<Value>,
    name: String,
    value: Value,
) {
    match stack.last_mut() {
        Some((_, parent)) => parent.children.push((name, value)),
        None => *root = Some(value),
    }
}

fn utf8(bytes: &[u8]) -> Result<String, GatewayError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| GatewayError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_nested_elements_mirror_structure() {
        let value = xml_to_value(
            "<IATSRESPONSE><PROCESSRESULT><AUTHORIZATIONRESULT>OK:678594</AUTHORIZATIONRESULT>\
             <CUSTOMERCODE>A10396688</CUSTOMERCODE></PROCESSRESULT></IATSRESPONSE>",
        )
        .unwrap();

        assert_eq!(
            value,
            json!({
                "PROCESSRESULT": {
                    "AUTHORIZATIONRESULT": "OK:678594",
                    "CUSTOMERCODE": "A10396688"
                }
            })
        );
    }

    #[test]
    fn test_repeated_siblings_become_array() {
        let value = xml_to_value("<list><item>a</item><item>b</item><item>c</item></list>")
            .unwrap();
        assert_eq!(value, json!({ "item": ["a", "b", "c"] }));
    }

    #[test]
    fn test_numeric_text_stays_string() {
        let value = xml_to_value("<r><code>100</code></r>").unwrap();
        assert_eq!(value, json!({ "code": "100" }));
    }

    #[test]
    fn test_attributes_are_collected() {
        let value = xml_to_value(r#"<r><tn id="5">x</tn></r>"#).unwrap();
        assert_eq!(
            value,
            json!({ "tn": { "@attributes": { "id": "5" }, "#text": "x" } })
        );
    }

    #[test]
    fn test_namespace_prefixes_are_dropped() {
        let value = xml_to_value(
            r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
                 <soap:Body><Status>Failure</Status></soap:Body>
               </soap:Envelope>"#,
        )
        .unwrap();
        assert_eq!(value, json!({ "Body": { "Status": "Failure" } }));
    }

    #[test]
    fn test_empty_element_is_empty_map() {
        let value = xml_to_value("<r><detail/></r>").unwrap();
        assert_eq!(value, json!({ "detail": {} }));
    }

    #[test]
    fn test_cdata_is_preserved() {
        let value = xml_to_value("<r><raw><![CDATA[<keep me>]]></raw></r>").unwrap();
        assert_eq!(value, json!({ "raw": "<keep me>" }));
    }

    #[test]
    fn test_text_only_root_is_string() {
        let value = xml_to_value("<r>hello</r>").unwrap();
        assert_eq!(value, json!("hello"));
    }

    #[test]
    fn test_malformed_input_fails() {
        assert!(matches!(
            xml_to_value("<a><b></a>"),
            Err(GatewayError::Parse(_))
        ));
    }

    #[test]
    fn test_unclosed_element_fails() {
        assert!(matches!(
            xml_to_value("<a><b>x</b>"),
            Err(GatewayError::Parse(_))
        ));
    }

    #[test]
    fn test_multiple_roots_fail() {
        assert!(matches!(
            xml_to_value("<a/><b/>"),
            Err(GatewayError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(xml_to_value(""), Err(GatewayError::Parse(_))));
    }
}
