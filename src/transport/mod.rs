//! HTTP transport shared by every outbound call.

mod http;

pub use http::{build_client, TransportError};
