pub mod config;
pub mod fetch;
pub mod request;
pub mod schema;
pub mod transport;
pub mod utils;

pub use fetch::{playground_fetch, FetchError, FetchOptions};
pub use request::{request, JsonResponse, RequestOptions};
pub use transport::{HttpResponse, ReqwestTransport, RequestInit, Transport, TransportError};
