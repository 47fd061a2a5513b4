//! The seam between the HTTP layer and the Instagram source.

use std::future::Future;

use futures::Stream;

use crate::client::InstagramClient;
use crate::error::SourceError;
use crate::feed::post_stream;
use crate::types::{Post, Profile};

/// Capability the HTTP layer consumes: profile lookup plus a lazy,
/// restartable-per-call post stream.
///
/// Implemented by [`InstagramClient`] for real traffic; server tests swap
/// in a mock source.
pub trait ProfileSource: Clone + Send + Sync + 'static {
    /// Looks up a profile by username.
    fn fetch_profile(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Profile, SourceError>> + Send;

    /// Returns a fresh stream over the profile's posts in
    /// reverse-chronological order. Pages are fetched on demand, so callers
    /// that stop early never pull further pages from the source.
    fn recent_posts(
        &self,
        profile: &Profile,
    ) -> impl Stream<Item = Result<Post, SourceError>> + Send + 'static;
}

impl ProfileSource for InstagramClient {
    fn fetch_profile(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Profile, SourceError>> + Send {
        self.lookup_profile(username)
    }

    fn recent_posts(
        &self,
        profile: &Profile,
    ) -> impl Stream<Item = Result<Post, SourceError>> + Send + 'static {
        post_stream(self.clone(), profile.feed.clone())
    }
}
