//! SOAP transport over HTTP.
use log::debug;
use log::warn;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::Value;

use super::Transport;
use crate::domain::GatewayError;
use crate::domain::RawResponse;
use crate::domain::RequestParams;

/// Namespace the vendor operations live in; also the SOAPAction prefix.
const SOAP_NS: &str = "https://www.iatspayments.com/NetGate/";

#[derive(Debug)]
pub struct SoapTransport {
    http: Client,
}

impl SoapTransport {
    pub fn new() -> Self {
        SoapTransport {
            http: Client::new(),
        }
    }
}

impl Default for SoapTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for SoapTransport {
    fn invoke(
        &self,
        endpoint: &str,
        operation: &str,
        params: &RequestParams,
    ) -> Result<RawResponse, GatewayError> {
        let envelope = build_envelope(operation, params);
        // Parameters carry card data and credentials; log the call shape only.
        debug!("invoking {} at {}", operation, endpoint);
        let response = self
            .http
            .post(endpoint)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", format!("{SOAP_NS}{operation}"))
            .body(envelope)
            .send()?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            let fault = fault_from_body(status, &body);
            warn!("{} at {} failed - {}", operation, endpoint, fault);
            return Err(fault);
        }
        Ok(RawResponse::new(body))
    }
}

fn build_envelope(operation: &str, params: &RequestParams) -> String {
    let mut fields = String::new();
    for (name, value) in params.iter() {
        let text = value_text(value);
        let text = quick_xml::escape::escape(&text);
        fields.push_str(&format!("<{name}>{text}</{name}>"));
    }
    format!(
        "<soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">\
         <soap:Body>\
         <{operation} xmlns=\"{SOAP_NS}\">{fields}</{operation}>\
         </soap:Body>\
         </soap:Envelope>"
    )
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Surfaces the vendor fault unchanged. Bodies that do not carry a SOAP
/// fault degrade to the HTTP status.
fn fault_from_body(status: StatusCode, body: &str) -> GatewayError {
    let fault = crate::xml::xml_to_value(body).ok().and_then(|value| {
        let fault = value.get("Body")?.get("Fault")?;
        let code = fault.get("faultcode")?.as_str()?.to_string();
        let message = fault.get("faultstring")?.as_str()?.to_string();
        Some((code, message))
    });
    match fault {
        Some((code, message)) => GatewayError::RemoteCall { code, message },
        None => GatewayError::RemoteCall {
            code: status.as_u16().to_string(),
            message: status
                .canonical_reason()
                .unwrap_or("remote call failed")
                .to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_envelope_shape() {
        let params = RequestParams::new()
            .with("customerCode", "A10396688")
            .with("total", "15.00");
        let envelope = build_envelope("ProcessCreditCardWithCustomerCodeV1", &params);

        assert_eq!(
            envelope,
            "<soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">\
             <soap:Body>\
             <ProcessCreditCardWithCustomerCodeV1 xmlns=\"https://www.iatspayments.com/NetGate/\">\
             <customerCode>A10396688</customerCode><total>15.00</total>\
             </ProcessCreditCardWithCustomerCodeV1>\
             </soap:Body>\
             </soap:Envelope>"
        );
    }

    #[test]
    fn test_build_envelope_escapes_values() {
        let params = RequestParams::new().with("comment", "a<b&c");
        let envelope = build_envelope("ProcessCreditCardV1", &params);
        assert!(envelope.contains("<comment>a&lt;b&amp;c</comment>"));
    }

    #[test]
    fn test_build_envelope_renders_numbers_as_text() {
        let params = RequestParams::new().with("item", 2);
        let envelope = build_envelope("GetCustomerCodeDetailV1", &params);
        assert!(envelope.contains("<item>2</item>"));
    }

    #[test]
    fn test_fault_from_body_keeps_vendor_fault() {
        let body = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
            <soap:Body>
              <soap:Fault>
                <faultcode>soap:Server</faultcode>
                <faultstring>Server was unable to process request.</faultstring>
              </soap:Fault>
            </soap:Body>
          </soap:Envelope>"#;

        let fault = fault_from_body(StatusCode::INTERNAL_SERVER_ERROR, body);
        match fault {
            GatewayError::RemoteCall { code, message } => {
                assert_eq!(code, "soap:Server");
                assert_eq!(message, "Server was unable to process request.");
            }
            other => panic!("expected RemoteCall, got {:?}", other),
        }
    }

    #[test]
    fn test_fault_from_body_falls_back_to_status() {
        let fault = fault_from_body(StatusCode::BAD_GATEWAY, "not xml at all");
        match fault {
            GatewayError::RemoteCall { code, message } => {
                assert_eq!(code, "502");
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("expected RemoteCall, got {:?}", other),
        }
    }
}
