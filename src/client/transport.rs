//! Transport seam
//!
//! A [`Transport`] moves one JSON-encoded unary call to the service and
//! back. [`TypedRpc`] binds a transport to one method path and handles the
//! message encoding, which makes it an [`AsyncInvoke`] capability a pager
//! can drive.
//!
//! Replies follow the proto3 JSON mapping: a `null` member decodes as the
//! field's default, and a `null` reply as the default message.

use crate::error::Result;
use crate::metadata::CallMetadata;
use crate::pagination::AsyncInvoke;
use crate::types::JsonValue;
use async_trait::async_trait;
use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Carries unary calls to the service
///
/// Failures with a status should be returned as [`Error::Rpc`](crate::Error::Rpc) so retry
/// predicates can see the code; connection-level failures may be returned
/// as [`Error::Transport`](crate::Error::Transport).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` to the fully qualified method `path`
    async fn unary(&self, path: &str, request: JsonValue, metadata: CallMetadata)
        -> Result<JsonValue>;
}

/// One RPC method bound to a transport
pub struct TypedRpc<Req, Resp> {
    transport: Arc<dyn Transport>,
    path: String,
    _marker: PhantomData<fn(Req) -> Resp>,
}

impl<Req, Resp> TypedRpc<Req, Resp>
where
    Req: Serialize + Send + 'static,
    Resp: DeserializeOwned + Send + 'static,
{
    pub fn new(transport: Arc<dyn Transport>, path: impl Into<String>) -> Self {
        Self {
            transport,
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// Fully qualified method path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Encode, send, and decode one call
    pub async fn call(&self, request: Req, metadata: CallMetadata) -> Result<Resp> {
        let body = serde_json::to_value(&request)?;
        let mut reply = self.transport.unary(&self.path, body, metadata).await?;
        if reply.is_null() {
            reply = JsonValue::Object(serde_json::Map::new());
        }
        drop_nulls(&mut reply);
        let response = serde_json::from_value(reply)?;
        debug!(path = %self.path, "Received response");
        Ok(response)
    }
}

/// Remove `null` object members at every depth
fn drop_nulls(value: &mut JsonValue) {
    match value {
        JsonValue::Object(members) => {
            members.retain(|_, member| !member.is_null());
            members.values_mut().for_each(drop_nulls);
        }
        JsonValue::Array(elements) => elements.iter_mut().for_each(drop_nulls),
        _ => {}
    }
}

impl<Req, Resp> AsyncInvoke<Req, Resp> for TypedRpc<Req, Resp>
where
    Req: Serialize + Send + 'static,
    Resp: DeserializeOwned + Send + 'static,
{
    fn invoke(&self, request: Req, metadata: CallMetadata) -> BoxFuture<'_, Result<Resp>> {
        Box::pin(self.call(request, metadata))
    }

    fn name(&self) -> &str {
        &self.path
    }
}

impl<Req, Resp> fmt::Debug for TypedRpc<Req, Resp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedRpc").field("path", &self.path).finish()
    }
}
