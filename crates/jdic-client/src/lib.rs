pub mod client;
pub mod query;
pub mod transport;

pub use client::{Client, DEFAULT_BASE_URL, LookupError};
pub use query::{build_url, query_code};
pub use transport::{HttpTransport, Transport, TransportError};
