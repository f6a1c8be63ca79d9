//! HTTP response types

use crate::error::HttpError;

/// HTTP Response type - generic over the body type R and error type E
/// This is the primary return type for all transport operations
pub type Response<R, E = HttpError> = Result<R, E>;
