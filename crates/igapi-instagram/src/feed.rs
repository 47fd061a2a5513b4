//! Lazy timeline streaming.
//!
//! The profile response embeds the first timeline page; this module turns
//! that page plus its cursor into a post-at-a-time stream that only hits
//! the GraphQL endpoint when the buffered page runs out. Callers bound the
//! stream with `take`, so pages past the taken prefix are never requested.

use std::collections::VecDeque;

use futures::stream::{self, Stream};

use crate::client::InstagramClient;
use crate::error::SourceError;
use crate::types::{FeedCursor, Post};

/// Maximum number of timeline pages fetched past the embedded first page.
/// Guards against cursors that cycle without advancing.
const MAX_PAGES: usize = 20;

struct StreamState {
    client: InstagramClient,
    username: String,
    user_id: String,
    buffered: VecDeque<Post>,
    cursor: Option<String>,
    has_next_page: bool,
    pages_fetched: usize,
}

pub(crate) fn post_stream(
    client: InstagramClient,
    feed: FeedCursor,
) -> impl Stream<Item = Result<Post, SourceError>> + Send {
    let state = StreamState {
        client,
        username: feed.username,
        user_id: feed.user_id,
        buffered: feed.first_page.into(),
        cursor: feed.end_cursor,
        has_next_page: feed.has_next_page,
        pages_fetched: 0,
    };

    stream::try_unfold(state, |mut state| async move {
        loop {
            if let Some(post) = state.buffered.pop_front() {
                return Ok(Some((post, state)));
            }
            if !state.has_next_page {
                return Ok(None);
            }

            state.pages_fetched += 1;
            if state.pages_fetched > MAX_PAGES {
                return Err(SourceError::Other(format!(
                    "timeline for '{}' exceeded {MAX_PAGES} pages without finishing",
                    state.username
                )));
            }

            tracing::debug!(
                username = %state.username,
                page = state.pages_fetched,
                "fetching timeline page"
            );
            let page = state
                .client
                .fetch_timeline_page(&state.username, &state.user_id, state.cursor.as_deref())
                .await?;

            state.has_next_page = page.page_info.has_next_page;
            state.cursor = page.page_info.end_cursor;
            state.buffered = page
                .edges
                .into_iter()
                .map(|edge| Post::from_node(edge.node))
                .collect::<Result<VecDeque<_>, _>>()?;
        }
    })
}
