//! Gateway client holding the account credentials and a regional server
//! selector. Every call is a single stateless request-response against the
//! injected transport.
use log::debug;

use crate::domain::Credentials;
use crate::domain::GatewayError;
use crate::domain::RawResponse;
use crate::domain::RequestParams;
use crate::domain::ServerId;
use crate::services::CustomerLink;
use crate::services::ProcessLink;
use crate::transport::SoapTransport;
use crate::transport::Transport;

#[derive(Debug)]
pub struct GatewayClient<T> {
    credentials: Credentials,
    server: ServerId,
    transport: T,
}

impl GatewayClient<SoapTransport> {
    /// Creates a client against the North America region.
    pub fn new(agent_code: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_server(agent_code, password, ServerId::Na)
    }

    pub fn with_server(
        agent_code: impl Into<String>,
        password: impl Into<String>,
        server: ServerId,
    ) -> Self {
        GatewayClient {
            credentials: Credentials::new(agent_code, password),
            server,
            transport: SoapTransport::new(),
        }
    }
}

impl<T: Transport> GatewayClient<T> {
    /// Creates a client over a caller-supplied transport.
    pub fn with_transport(credentials: Credentials, server: ServerId, transport: T) -> Self {
        GatewayClient {
            credentials,
            server,
            transport,
        }
    }

    pub fn server(&self) -> ServerId {
        self.server
    }

    pub fn agent_code(&self) -> &str {
        self.credentials.agent_code()
    }

    /// Full url for a service endpoint path on the selected region.
    pub fn endpoint_url(&self, endpoint_path: &str) -> String {
        format!("{}{}", self.server.base_url(), endpoint_path)
    }

    /// Invokes a remote operation with the account credentials merged into
    /// the caller parameters. Single attempt; a fault propagates unchanged
    /// and any retry policy belongs to the caller.
    pub fn call(
        &self,
        endpoint_path: &str,
        operation: &str,
        params: RequestParams,
    ) -> Result<RawResponse, GatewayError> {
        let mut params = params;
        params.merge_credentials(&self.credentials);
        let url = self.endpoint_url(endpoint_path);
        debug!("calling {} on {}", operation, url);
        self.transport.invoke(&url, operation, &params)
    }

    /// Authorization and refund operations.
    pub fn process_link(&self) -> ProcessLink<'_, T> {
        ProcessLink::new(self)
    }

    /// Customer-code management operations.
    pub fn customer_link(&self) -> CustomerLink<'_, T> {
        CustomerLink::new(self)
    }
}
