//! Async pager
//!
//! Same control flow as the blocking pager; the only suspension point is
//! the continuation call. Items already buffered in a page are handed out
//! without yielding to the runtime.

use super::types::{AsyncInvoke, PageCursor, PageRequest, PageResponse};
use crate::error::Result;
use crate::metadata::CallMetadata;
use futures::stream::{self, Stream};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

/// Async pager over a cursor-linked RPC
///
/// ```ignore
/// let mut pager = client.list_jobs(request, CallOptions::default()).await?;
/// while let Some(job) = pager.next_item().await {
///     println!("{}", job?.title);
/// }
/// ```
pub struct AsyncPager<Req, Resp> {
    method: Arc<dyn AsyncInvoke<Req, Resp>>,
    request: Req,
    response: Resp,
    metadata: CallMetadata,
    cursor: PageCursor,
}

impl<Req, Resp> AsyncPager<Req, Resp>
where
    Req: PageRequest + Send + 'static,
    Resp: PageResponse + Send + 'static,
{
    /// Create a pager from an invocation capability
    pub fn new(
        method: Arc<dyn AsyncInvoke<Req, Resp>>,
        request: Req,
        response: Resp,
        metadata: CallMetadata,
    ) -> Self {
        Self {
            method,
            request,
            response,
            metadata,
            cursor: PageCursor::new(),
        }
    }

    /// Create a pager from an async closure
    pub fn from_fn<F, Fut>(method: F, request: Req, response: Resp, metadata: CallMetadata) -> Self
    where
        F: Fn(Req, CallMetadata) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Resp>> + Send + 'static,
    {
        Self::new(Arc::new(method), request, response, metadata)
    }

    /// Most recently received response
    pub fn latest_response(&self) -> &Resp {
        &self.response
    }

    /// Request that produced the latest response
    pub fn request(&self) -> &Req {
        &self.request
    }

    /// Metadata sent with every continuation call
    pub fn metadata(&self) -> &CallMetadata {
        &self.metadata
    }

    /// Pages received so far, including the initial one
    pub fn pages_fetched(&self) -> u32 {
        self.cursor.pages_fetched
    }

    /// True once an empty token or a failed continuation has been observed
    pub fn is_exhausted(&self) -> bool {
        self.cursor.exhausted
    }

    /// Next page, fetching it if the current one has been consumed
    pub async fn next_page(&mut self) -> Option<Result<&Resp>> {
        if self.cursor.page_pending() {
            self.cursor.emit_page(self.response.items().len());
            return Some(Ok(&self.response));
        }
        match self.fetch_next().await? {
            Ok(()) => {
                self.cursor.emit_page(self.response.items().len());
                Some(Ok(&self.response))
            }
            Err(e) => Some(Err(e)),
        }
    }

    /// Next item across page boundaries
    pub async fn next_item(&mut self) -> Option<Result<Resp::Item>> {
        loop {
            if let Some(item) = self.cursor.take_item(self.response.items()) {
                return Some(Ok(item));
            }
            if let Err(e) = self.fetch_next().await? {
                return Some(Err(e));
            }
        }
    }

    /// Drain every remaining item, stopping at the first error
    pub async fn collect_items(mut self) -> Result<Vec<Resp::Item>> {
        let mut items = Vec::new();
        while let Some(item) = self.next_item().await {
            items.push(item?);
        }
        Ok(items)
    }

    /// Consume the pager as a stream of items
    pub fn into_stream(self) -> impl Stream<Item = Result<Resp::Item>> + Send
    where
        Resp::Item: Send,
    {
        stream::unfold(self, |mut pager| async move {
            let item = pager.next_item().await?;
            Some((item, pager))
        })
    }

    /// Consume the pager as a stream of whole pages
    pub fn into_pages(self) -> impl Stream<Item = Result<Resp>> + Send
    where
        Resp: Clone,
    {
        stream::unfold(self, |mut pager| async move {
            let page = pager.next_page().await?.cloned();
            Some((page, pager))
        })
    }

    async fn fetch_next(&mut self) -> Option<Result<()>> {
        let token = self.cursor.continuation(&self.response)?;
        let mut request = self.request.clone();
        request.set_page_token(token);

        debug!(
            method = self.method.name(),
            page = self.cursor.pages_fetched + 1,
            "Fetching next page"
        );

        match self
            .method
            .invoke(request.clone(), self.metadata.clone())
            .await
        {
            Ok(response) => {
                self.request = request;
                self.response = response;
                self.cursor.advance();
                Some(Ok(()))
            }
            Err(e) => {
                debug!(method = self.method.name(), error = %e, "Continuation call failed, pager exhausted");
                self.cursor.fail();
                Some(Err(e))
            }
        }
    }
}

impl<Req, Resp: fmt::Debug> fmt::Debug for AsyncPager<Req, Resp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncPager")
            .field("method", &self.method.name())
            .field("response", &self.response)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
