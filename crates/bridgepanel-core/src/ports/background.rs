//! Messaging port to the background bridge manager.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;
use crate::messages::BackgroundRequest;

/// Request/response channel to the background process.
///
/// Replies are returned raw; decoding (and deciding what counts as malformed)
/// is the caller's job, so a transport adapter never needs to know the reply
/// shapes.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use bridgepanel_core::{BackgroundPort, BackgroundRequest, TransportError};
/// use serde_json::{Value, json};
///
/// struct AlwaysDisconnected;
///
/// #[async_trait]
/// impl BackgroundPort for AlwaysDisconnected {
///     async fn request(&self, request: BackgroundRequest) -> Result<Value, TransportError> {
///         match request {
///             BackgroundRequest::GetStatus => Ok(json!({"status": "ok"})),
///             other => Err(TransportError::NoResponder(other.name())),
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait BackgroundPort: Send + Sync {
    /// Send a request and wait for the reply.
    async fn request(&self, request: BackgroundRequest) -> Result<Value, TransportError>;
}
