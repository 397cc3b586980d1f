use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Invalid server identifier {0}")]
    InvalidServerId(String),
    #[error("Remote call failed with fault {code} - {message}")]
    RemoteCall { code: String, message: String },
    #[error("Error parsing XML - {0}")]
    Parse(String),
    #[error("Unknown reject code {0}")]
    UnknownRejectCode(u16),
    #[error("Transport error - {0}")]
    Http(#[from] reqwest::Error),
}

impl From<quick_xml::Error> for GatewayError {
    fn from(e: quick_xml::Error) -> Self {
        GatewayError::Parse(e.to_string())
    }
}
