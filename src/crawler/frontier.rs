//! Frontier and visited set for one crawl
//!
//! This module handles:
//! - FIFO queue of URLs waiting to be fetched
//! - The visited set, the only authority on whether a URL was already fetched
//! - Rejecting URLs that are already visited or already waiting

use crate::url::CanonicalUrl;
use std::collections::{HashSet, VecDeque};

/// Pending and visited URLs of a crawl
///
/// A URL moves from pending to visited exactly once, when it is taken with
/// [`Frontier::next_url`]. The visited set only grows.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    /// URLs waiting to be fetched, in discovery order
    queue: VecDeque<CanonicalUrl>,

    /// Membership index for `queue`
    pending: HashSet<CanonicalUrl>,

    /// URLs for which a fetch attempt has been made
    visited: HashSet<CanonicalUrl>,
}

impl Frontier {
    /// Creates a frontier holding only the seed
    pub fn new(seed: CanonicalUrl) -> Self {
        let mut frontier = Self::default();
        frontier.offer(seed);
        frontier
    }

    /// Takes the next URL to fetch and marks it visited
    ///
    /// # Returns
    ///
    /// * `Some(CanonicalUrl)` - The oldest pending URL
    /// * `None` - The frontier is empty
    pub fn next_url(&mut self) -> Option<CanonicalUrl> {
        let url = self.queue.pop_front()?;
        self.pending.remove(&url);
        self.visited.insert(url.clone());
        Some(url)
    }

    /// Adds a URL if it was neither visited nor is already pending
    ///
    /// # Returns
    ///
    /// `true` if the URL was added
    pub fn offer(&mut self, url: CanonicalUrl) -> bool {
        if self.visited.contains(&url) || self.pending.contains(&url) {
            return false;
        }
        self.pending.insert(url.clone());
        self.queue.push_back(url);
        true
    }

    /// Returns true if a fetch attempt was already made for `url`
    pub fn is_visited(&self, url: &CanonicalUrl) -> bool {
        self.visited.contains(url)
    }

    /// Returns true if `url` is waiting to be fetched
    pub fn is_pending(&self, url: &CanonicalUrl) -> bool {
        self.pending.contains(url)
    }

    /// Returns the number of URLs waiting to be fetched
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns the number of URLs already taken from the frontier
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Returns whether no URL is waiting
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
