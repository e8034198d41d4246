//! Per-process radar state: the block source cache and click handling.
//!
//! Every rendered block's source is remembered under its block id so a click
//! on the inline radar can reopen it full size. The session is passed
//! explicitly to both the render path and the click path.

use indexmap::IndexMap;
use log::{debug, error, info};

use crate::{surface::doc_id_from_surface, view::ViewHost};

/// Decides when the oldest cached sources are dropped.
pub trait EvictionPolicy {
    /// Returns `true` while a cache holding `len` sources must shrink.
    fn should_evict(&self, len: usize) -> bool;
}

/// Never evicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbounded;

impl EvictionPolicy for Unbounded {
    fn should_evict(&self, _len: usize) -> bool {
        false
    }
}

/// Keeps at most this many sources, dropping the least recently stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity(pub usize);

impl EvictionPolicy for Capacity {
    fn should_evict(&self, len: usize) -> bool {
        len > self.0
    }
}

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click did not land on a radar.
    Ignored,
    /// The click landed on a radar whose source is not cached.
    Missed { doc_id: String },
    /// The expanded view was asked to show the radar.
    Expanded { doc_id: String },
}

/// Radar state shared by the render and click paths.
#[derive(Debug, Clone, Default)]
pub struct RadarSession<P = Unbounded> {
    cache: IndexMap<String, String>,
    policy: P,
}

impl RadarSession {
    /// Creates a session with an unbounded cache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: EvictionPolicy> RadarSession<P> {
    /// Creates a session with the given eviction policy.
    pub fn with_policy(policy: P) -> Self {
        Self {
            cache: IndexMap::new(),
            policy,
        }
    }

    /// Stores the source of a block, replacing any earlier source for it.
    pub fn remember(&mut self, doc_id: &str, source: &str) {
        // Re-storing moves the block to the most recent position.
        self.cache.shift_remove(doc_id);
        self.cache.insert(doc_id.to_string(), source.to_string());

        while self.policy.should_evict(self.cache.len()) {
            match self.cache.shift_remove_index(0) {
                Some((evicted, _)) => debug!(doc_id = evicted; "Evicted cached radar source"),
                None => break,
            }
        }
    }

    /// Returns the cached source of a block.
    pub fn lookup(&self, doc_id: &str) -> Option<&str> {
        self.cache.get(doc_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Handles a click on the element with id `target_id`.
    ///
    /// Clicks on a drawing surface whose block source is cached ask `host` to
    /// show that source in the expanded view. Everything else is a no-op; a
    /// cache miss is logged at error level but never fails.
    pub fn handle_click(&self, target_id: Option<&str>, host: &mut dyn ViewHost) -> ClickOutcome {
        info!(target_id:?; "Click");

        let Some(doc_id) = target_id.and_then(doc_id_from_surface) else {
            debug!("Click target is not a radar");
            return ClickOutcome::Ignored;
        };

        let Some(source) = self.lookup(doc_id) else {
            error!(doc_id; "No radar source cached for clicked surface");
            return ClickOutcome::Missed {
                doc_id: doc_id.to_string(),
            };
        };

        host.show_expanded(source);
        ClickOutcome::Expanded {
            doc_id: doc_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingHost {
        shown: Vec<String>,
    }

    impl ViewHost for RecordingHost {
        fn show_expanded(&mut self, source: &str) {
            self.shown.push(source.to_string());
        }
    }

    #[test]
    fn test_remember_is_idempotent() {
        let mut session = RadarSession::new();
        session.remember("42", "quadrants: []");
        session.remember("42", "quadrants: []");

        assert_eq!(session.len(), 1);
        assert_eq!(session.lookup("42"), Some("quadrants: []"));
    }

    #[test]
    fn test_unbounded_cache_grows() {
        let mut session = RadarSession::new();
        for i in 0..100 {
            session.remember(&i.to_string(), "quadrants: []");
        }

        assert_eq!(session.len(), 100);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut session = RadarSession::with_policy(Capacity(2));
        session.remember("a", "1");
        session.remember("b", "2");
        session.remember("a", "1 again");
        session.remember("c", "3");

        assert_eq!(session.len(), 2);
        assert_eq!(session.lookup("b"), None);
        assert_eq!(session.lookup("a"), Some("1 again"));
        assert_eq!(session.lookup("c"), Some("3"));
    }

    #[test]
    fn test_click_on_cached_radar_expands() {
        let mut session = RadarSession::new();
        session.remember("7", "quadrants: []");
        let mut host = RecordingHost::default();

        let outcome = session.handle_click(Some("radar7"), &mut host);

        assert_eq!(
            outcome,
            ClickOutcome::Expanded {
                doc_id: "7".to_string()
            }
        );
        assert_eq!(host.shown, ["quadrants: []"]);
    }

    #[test]
    fn test_click_cache_miss_is_silent() {
        let session = RadarSession::new();
        let mut host = RecordingHost::default();

        let outcome = session.handle_click(Some("radar7"), &mut host);

        assert_eq!(
            outcome,
            ClickOutcome::Missed {
                doc_id: "7".to_string()
            }
        );
        assert!(host.shown.is_empty());
    }

    #[test]
    fn test_click_elsewhere_is_ignored() {
        let mut session = RadarSession::new();
        session.remember("7", "quadrants: []");
        let mut host = RecordingHost::default();

        assert_eq!(session.handle_click(None, &mut host), ClickOutcome::Ignored);
        assert_eq!(
            session.handle_click(Some("sidebar"), &mut host),
            ClickOutcome::Ignored
        );
        assert!(host.shown.is_empty());
    }
}
