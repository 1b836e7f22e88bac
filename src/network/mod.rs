//! # Networking
//!
//! A small typed request/response layer:
//!
//! ```text
//! NetworkRequest ──► Transport::execute ──► RawResponse ──► resolve::<S>() ──► S | NetworkError
//!   (request.rs)       (transport.rs)                        (resolver.rs)
//! ```
//!
//! [`NetworkManager`] wires the three together. Nothing in here knows about
//! sports or events.

pub mod error;
pub mod manager;
pub mod request;
pub mod resolver;
pub mod transport;

pub use error::NetworkError;
pub use manager::NetworkManager;
pub use request::{HttpMethod, NetworkRequest};
pub use resolver::{Json, ResponseShape};
pub use transport::{RawResponse, ReqwestTransport, Transport, TransportError};
