//! Auto-paging over list endpoints as a `Stream`.
//!
//! The pager repeats a list call, feeding the id of the last item of each
//! page back as `starting_after`, until a page reports `has_more: false`.
//! When the initial parameters contain `ending_before` it walks backwards
//! instead, feeding the first item id back as `ending_before`.
//!
//! # Example
//!
//! ```rust,ignore
//! use futures_util::TryStreamExt;
//!
//! let coupons: Vec<Coupon> = Coupon::list_auto_paging(&client, &params, None)?
//!     .try_collect()
//!     .await?;
//! ```

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use pin_project_lite::pin_project;
use serde_json::{Map, Value};

use crate::expandable::Object;
use crate::list::List;

const STARTING_AFTER: &str = "starting_after";
const ENDING_BEFORE: &str = "ending_before";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn of(params: &Map<String, Value>) -> Self {
        if params.get(ENDING_BEFORE).is_some_and(|v| !v.is_null()) {
            Self::Backward
        } else {
            Self::Forward
        }
    }

    fn cursor_key(self) -> &'static str {
        match self {
            Self::Forward => STARTING_AFTER,
            Self::Backward => ENDING_BEFORE,
        }
    }

    fn next_cursor<T: Object>(self, page: &List<T>) -> Option<String> {
        if !page.has_more {
            return None;
        }
        let cursor = match self {
            Self::Forward => page.starting_after_cursor(),
            Self::Backward => page.ending_before_cursor(),
        };
        cursor.map(ToOwned::to_owned)
    }
}

/// Cursor bookkeeping shared by both pagers.
#[derive(Debug)]
struct CursorState {
    base_params: Map<String, Value>,
    direction: Direction,
    next_cursor: Option<String>,
    done: bool,
}

impl CursorState {
    fn new(base_params: Map<String, Value>) -> Self {
        Self {
            direction: Direction::of(&base_params),
            base_params,
            next_cursor: None,
            done: false,
        }
    }

    /// Parameters for the next fetch. The base parameters are cloned once per page.
    fn next_params(&self) -> Map<String, Value> {
        let mut params = self.base_params.clone();
        if let Some(cursor) = &self.next_cursor {
            params.insert(
                self.direction.cursor_key().to_owned(),
                Value::String(cursor.clone()),
            );
        }
        params
    }

    /// Record a fetched page. An empty page ends paging even if it claims more.
    fn advance<T: Object>(&mut self, page: &List<T>) {
        self.next_cursor = self.direction.next_cursor(page);
        if self.next_cursor.is_none() {
            self.done = true;
        }
    }
}

pin_project! {
    /// Stream of individual items across every page of a list endpoint.
    ///
    /// Pages are fetched lazily, one at a time, as the buffer drains. A
    /// fetch error is yielded once and ends the stream.
    pub struct ListPager<T, E, F, Fut>
    where
        F: FnMut(Map<String, Value>) -> Fut,
        Fut: Future<Output = Result<List<T>, E>>,
    {
        state: CursorState,
        buffer: VecDeque<T>,
        fetcher: F,
        #[pin]
        current_fetch: Option<Fut>,
    }
}

impl<T, E, F, Fut> ListPager<T, E, F, Fut>
where
    F: FnMut(Map<String, Value>) -> Fut,
    Fut: Future<Output = Result<List<T>, E>>,
{
    /// Create a pager from the encoded parameters of the first list call.
    pub fn new(base_params: Map<String, Value>, fetcher: F) -> Self {
        Self {
            state: CursorState::new(base_params),
            buffer: VecDeque::new(),
            fetcher,
            current_fetch: None,
        }
    }
}

impl<T, E, F, Fut> Stream for ListPager<T, E, F, Fut>
where
    T: Object,
    F: FnMut(Map<String, Value>) -> Fut,
    Fut: Future<Output = Result<List<T>, E>>,
{
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(item) = this.buffer.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if this.state.done {
                return Poll::Ready(None);
            }

            if let Some(fut) = this.current_fetch.as_mut().as_pin_mut() {
                match fut.poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.current_fetch.set(None);
                        this.state.advance(&page);
                        tracing::trace!(items = page.len(), has_more = page.has_more, "fetched list page");
                        this.buffer.extend(page.data);
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.current_fetch.set(None);
                        this.state.done = true;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            let fut = (this.fetcher)(this.state.next_params());
            this.current_fetch.set(Some(fut));
        }
    }
}

pin_project! {
    /// Stream of whole pages of a list endpoint.
    pub struct PagesPager<T, E, F, Fut>
    where
        F: FnMut(Map<String, Value>) -> Fut,
        Fut: Future<Output = Result<List<T>, E>>,
    {
        state: CursorState,
        fetcher: F,
        #[pin]
        current_fetch: Option<Fut>,
    }
}

impl<T, E, F, Fut> PagesPager<T, E, F, Fut>
where
    F: FnMut(Map<String, Value>) -> Fut,
    Fut: Future<Output = Result<List<T>, E>>,
{
    pub fn new(base_params: Map<String, Value>, fetcher: F) -> Self {
        Self {
            state: CursorState::new(base_params),
            fetcher,
            current_fetch: None,
        }
    }
}

impl<T, E, F, Fut> Stream for PagesPager<T, E, F, Fut>
where
    T: Object,
    F: FnMut(Map<String, Value>) -> Fut,
    Fut: Future<Output = Result<List<T>, E>>,
{
    type Item = Result<List<T>, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if this.state.done {
                return Poll::Ready(None);
            }

            if let Some(fut) = this.current_fetch.as_mut().as_pin_mut() {
                match fut.poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.current_fetch.set(None);
                        this.state.advance(&page);
                        return Poll::Ready(Some(Ok(page)));
                    }
                    Poll::Ready(Err(e)) => {
                        this.current_fetch.set(None);
                        this.state.done = true;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            let fut = (this.fetcher)(this.state.next_params());
            this.current_fetch.set(Some(fut));
        }
    }
}
