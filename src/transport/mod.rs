//! Transport boundary to the remote SOAP service.
mod soap;

pub use soap::SoapTransport;

use crate::domain::GatewayError;
use crate::domain::RawResponse;
use crate::domain::RequestParams;

/// One outbound call per invocation: a named remote operation with a flat
/// parameter set in, either the raw payload or the vendor fault out.
#[cfg_attr(test, mockall::automock)]
pub trait Transport {
    fn invoke(
        &self,
        endpoint: &str,
        operation: &str,
        params: &RequestParams,
    ) -> Result<RawResponse, GatewayError>;
}
