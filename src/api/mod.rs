//! Backend API access
//!
//! Everything the crate knows about the REST collaborator lives here: the
//! response envelope, the endpoint catalog, and the HTTP gateway.

pub mod client;
pub mod endpoints;
pub mod envelope;

pub use client::{ApiClient, ApiRequest, ApiSuccess, HttpMethod, HttpTransport, Transport};
pub use endpoints::{Endpoint, require_permission};
pub use envelope::{Envelope, Page};
