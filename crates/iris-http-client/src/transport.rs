//! Transport trait the IRIS gateway is written against

use std::fmt::{self, Debug};

use async_trait::async_trait;

use crate::response::Response;

/// HTTP methods used by the IRIS API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PATCH
    Patch,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Patch => write!(f, "PATCH"),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
        }
    }
}

/// Expected HTTP Transport
///
/// Implementations own base URL resolution, authentication, and the wire.
/// They must be safe to share between tasks; the gateway holds one behind an
/// `Arc` and issues calls concurrently.
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    /// Base URL IRIS API paths are appended to, without a trailing `/`
    fn iris_url(&self) -> String;

    /// Send `body` (already JSON encoded) to `url` and return the raw body of
    /// a successful response
    async fn call(&self, method: Method, url: &str, body: Option<Vec<u8>>) -> Response<Vec<u8>>;
}
