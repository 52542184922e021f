//! Pagination module
//!
//! Supports: blocking iteration, async pull, and `futures::Stream` adapters
//!
//! # Overview
//!
//! Every list and search RPC of the Talent API returns one page of results
//! plus a `next_page_token`. A pager is built from the first response (the
//! caller has already made that call) and lazily issues continuation calls
//! with the same request, same metadata, and the previous response's token,
//! until a response arrives with an empty token.
//!
//! One generic implementation serves every method family: a request type
//! implements [`PageRequest`] and a response type implements
//! [`PageResponse`].
//!
//! There is no client-side page cap. A server that never returns an empty
//! token produces an endless sequence; bound it with `take` if needed.

mod pager;
mod stream;
mod types;

pub use pager::{Pager, Pages};
pub use stream::AsyncPager;
pub use types::{AsyncInvoke, Invoke, PageCursor, PageRequest, PageResponse};
