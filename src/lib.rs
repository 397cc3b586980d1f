#![warn(rust_2018_idioms, missing_debug_implementations)]
mod client;
mod domain;
mod rules;
mod services;
mod transport;
mod xml;

pub use crate::client::*;
pub use crate::domain::*;
pub use crate::rules::*;
pub use crate::services::*;
pub use crate::transport::*;
pub use crate::xml::*;
