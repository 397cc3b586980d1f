//! Thin wrappers over the vendor services. They only assemble parameters and
//! delegate to the client; responses come back uninterpreted.
mod customer;
mod process;

pub use customer::CustomerCodeRequest;
pub use customer::CustomerLink;
pub use customer::CUSTOMER_LINK_ENDPOINT;
pub use process::CreditCardPayment;
pub use process::ProcessLink;
pub use process::PROCESS_LINK_ENDPOINT;
