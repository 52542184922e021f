//! Blocking pager
//!
//! Iterates the items of a paged RPC, issuing continuation calls on the
//! calling thread only when the current page runs out.

use super::types::{Invoke, PageCursor, PageRequest, PageResponse};
use crate::error::Result;
use crate::metadata::CallMetadata;
use std::fmt;
use tracing::debug;

/// Blocking pager over a cursor-linked RPC
///
/// Created from the first response, which the caller has already obtained.
/// Iterating yields `Result<Item>`; after an error the pager is exhausted.
///
/// ```ignore
/// let pager = client.list_jobs(request, CallOptions::default())?;
/// for job in pager {
///     println!("{}", job?.title);
/// }
/// ```
pub struct Pager<Req, Resp> {
    method: Box<dyn Invoke<Req, Resp> + Send>,
    request: Req,
    response: Resp,
    metadata: CallMetadata,
    cursor: PageCursor,
}

impl<Req, Resp> Pager<Req, Resp>
where
    Req: PageRequest,
    Resp: PageResponse,
{
    /// Create a pager from an invocation capability
    pub fn new(
        method: impl Invoke<Req, Resp> + Send + 'static,
        request: Req,
        response: Resp,
        metadata: CallMetadata,
    ) -> Self {
        Self {
            method: Box::new(method),
            request,
            response,
            metadata,
            cursor: PageCursor::new(),
        }
    }

    /// Create a pager from a closure
    pub fn from_fn<F>(method: F, request: Req, response: Resp, metadata: CallMetadata) -> Self
    where
        F: FnMut(&Req, &CallMetadata) -> Result<Resp> + Send + 'static,
    {
        Self::new(method, request, response, metadata)
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
    pub fn next_page(&mut self) -> Option<Result<&Resp>> {
        if self.cursor.page_pending() {
            self.cursor.emit_page(self.response.items().len());
            return Some(Ok(&self.response));
        }
        match self.fetch_next()? {
            Ok(()) => {
                self.cursor.emit_page(self.response.items().len());
                Some(Ok(&self.response))
            }
            Err(e) => Some(Err(e)),
        }
    }

    /// Next item across page boundaries
    pub fn next_item(&mut self) -> Option<Result<Resp::Item>> {
        loop {
            if let Some(item) = self.cursor.take_item(self.response.items()) {
                return Some(Ok(item));
            }
            if let Err(e) = self.fetch_next()? {
                return Some(Err(e));
            }
        }
    }

    /// Iterate whole pages instead of items
    pub fn pages(&mut self) -> Pages<'_, Req, Resp> {
        Pages { pager: self }
    }

    /// Issue the continuation call, or `None` when pagination is over
    fn fetch_next(&mut self) -> Option<Result<()>> {
        let token = self.cursor.continuation(&self.response)?;
        let mut request = self.request.clone();
        request.set_page_token(token);

        debug!(
            page = self.cursor.pages_fetched + 1,
            "Fetching next page (blocking)"
        );

        match self.method.invoke(&request, &self.metadata) {
            Ok(response) => {
                self.request = request;
                self.response = response;
                self.cursor.advance();
                Some(Ok(()))
            }
            Err(e) => {
                debug!(error = %e, "Continuation call failed, pager exhausted");
                self.cursor.fail();
                Some(Err(e))
            }
        }
    }
}

impl<Req, Resp> Iterator for Pager<Req, Resp>
where
    Req: PageRequest,
    Resp: PageResponse,
{
    type Item = Result<Resp::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_item()
    }
}

impl<Req, Resp: fmt::Debug> fmt::Debug for Pager<Req, Resp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("response", &self.response)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

/// Iterator over whole pages of a [`Pager`]
pub struct Pages<'a, Req, Resp> {
    pager: &'a mut Pager<Req, Resp>,
}

impl<Req, Resp> Iterator for Pages<'_, Req, Resp>
where
    Req: PageRequest,
    Resp: PageResponse + Clone,
{
    type Item = Result<Resp>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pager.next_page().map(|page| page.cloned())
    }
}
