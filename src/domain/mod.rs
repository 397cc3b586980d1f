//! Module that describe domain entities and errors.
mod entities;
mod errors;

pub use entities::resolve_server;
pub use entities::Credentials;
pub use entities::RawResponse;
pub use entities::RequestParams;
pub use entities::ServerId;
pub use entities::AGENT_CODE_FIELD;
pub use entities::NA_SERVER;
pub use entities::PASSWORD_FIELD;
pub use entities::UK_SERVER;
pub use errors::*;
