//! Pagination types and traits
//!
//! Defines the request/response contracts every paged RPC satisfies, the
//! invocation capabilities a pager drives, and the forward-only cursor the
//! blocking and async pagers share.

use crate::error::Result;
use crate::metadata::CallMetadata;
use futures::future::BoxFuture;
use std::future::Future;

/// A request message that carries a continuation cursor
pub trait PageRequest: Clone {
    /// Current page token (empty for the first page)
    fn page_token(&self) -> &str;

    /// Replace the page token, leaving every other field untouched
    fn set_page_token(&mut self, token: String);
}

/// A response message holding one page of results
pub trait PageResponse {
    /// Element type of the paged collection
    type Item: Clone;

    /// Items of this page, in server order
    fn items(&self) -> &[Self::Item];

    /// Token for the next page; empty when there are no more pages
    fn next_page_token(&self) -> &str;
}

/// Blocking invocation of one RPC method
pub trait Invoke<Req, Resp> {
    /// Perform the call
    fn invoke(&mut self, request: &Req, metadata: &CallMetadata) -> Result<Resp>;
}

impl<Req, Resp, F> Invoke<Req, Resp> for F
where
    F: FnMut(&Req, &CallMetadata) -> Result<Resp>,
{
    fn invoke(&mut self, request: &Req, metadata: &CallMetadata) -> Result<Resp> {
        self(request, metadata)
    }
}

/// Asynchronous invocation of one RPC method
pub trait AsyncInvoke<Req, Resp>: Send + Sync {
    /// Perform the call
    fn invoke(&self, request: Req, metadata: CallMetadata) -> BoxFuture<'_, Result<Resp>>;

    /// Name used in log records
    fn name(&self) -> &str {
        "rpc"
    }
}

impl<Req, Resp, F, Fut> AsyncInvoke<Req, Resp> for F
where
    F: Fn(Req, CallMetadata) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Resp>> + Send + 'static,
{
    fn invoke(&self, request: Req, metadata: CallMetadata) -> BoxFuture<'_, Result<Resp>> {
        Box::pin(self(request, metadata))
    }
}

/// Forward-only read position shared by page and item iteration
///
/// A page is consumed once it has been emitted as a page or once item
/// iteration has reached it. Once `exhausted` is set no further calls are made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCursor {
    /// Index of the next item to yield from the current page
    pub item_index: usize,
    /// Whether the current page has been handed out
    pub page_emitted: bool,
    /// No more pages will be fetched
    pub exhausted: bool,
    /// Pages received so far, including the initial one
    pub pages_fetched: u32,
    /// Items yielded so far
    pub items_yielded: u64,
}

impl PageCursor {
    /// Cursor positioned at the start of the initial page
    pub fn new() -> Self {
        Self {
            pages_fetched: 1,
            ..Default::default()
        }
    }

    /// Token for the continuation call, or `None` once pagination is over
    pub fn continuation<R: PageResponse>(&mut self, response: &R) -> Option<String> {
        if self.exhausted {
            return None;
        }
        let token = response.next_page_token();
        if token.is_empty() {
            self.exhausted = true;
            return None;
        }
        Some(token.to_string())
    }

    /// A new page has arrived
    pub fn advance(&mut self) {
        self.item_index = 0;
        self.page_emitted = false;
        self.pages_fetched += 1;
    }

    /// A continuation call failed; stop for good
    pub fn fail(&mut self) {
        self.exhausted = true;
    }

    /// The current page was handed out whole
    pub fn emit_page(&mut self, item_count: usize) {
        self.page_emitted = true;
        self.item_index = item_count;
    }

    /// Take the next item of the current page, if any remain
    ///
    /// Reaching a page through item iteration consumes it, even when it
    /// holds no items.
    pub fn take_item<T: Clone>(&mut self, items: &[T]) -> Option<T> {
        self.page_emitted = true;
        let item = items.get(self.item_index)?.clone();
        self.item_index += 1;
        self.items_yielded += 1;
        Some(item)
    }

    /// Whether the current page still has unread content
    pub fn page_pending(&self) -> bool {
        !self.page_emitted
    }
}
