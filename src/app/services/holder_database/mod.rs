//! Shared accumulator of partial holders and the merge that combines them
//!
//! Every concurrently scanning file appends its partial holders here. Nothing
//! is combined until [`HolderDatabase::merge`], which folds all partials that
//! share an identifier into one canonical [`Holder`].
//!
//! # Contribution order
//!
//! Scalar fields follow a later-wins rule, so the fold order must not depend on
//! which file task happened to finish first. Each partial is appended with a
//! [`ContributionKey`] (position of its file in the request, then line number)
//! and the merge folds in key order. Appends that share a key keep their
//! arrival order.
//!
//! # Example Usage
//!
//! ```rust
//! use airmen_registry::app::services::holder_database::{ContributionKey, HolderDatabase};
//! use airmen_registry::Holder;
//!
//! let database = HolderDatabase::new();
//! database.append(
//!     ContributionKey::new(1, 2),
//!     Holder::new("A0000001").with_name(Some("JOHN".into()), None),
//! );
//! database.append(
//!     ContributionKey::new(0, 2),
//!     Holder::new("A0000001").with_name(Some("JON".into()), Some("DOE".into())),
//! );
//!
//! let holders = database.merge();
//! let holder = &holders["A0000001"];
//! assert_eq!(holder.first_name.as_deref(), Some("JOHN"));
//! assert_eq!(holder.last_name.as_deref(), Some("DOE"));
//! ```

#[cfg(test)]
pub mod tests;

use crate::app::models::{Holder, HolderMap};
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Position of a partial holder in the merge fold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContributionKey {
    /// Position of the contributing file in the request
    pub source: usize,
    /// Line of the record within its file
    pub line: u64,
}

impl ContributionKey {
    pub fn new(source: usize, line: u64) -> Self {
        Self { source, line }
    }
}

/// Concurrency-safe, append-only accumulator of partial holders
#[derive(Debug, Default)]
pub struct HolderDatabase {
    entries: Mutex<Vec<(ContributionKey, Holder)>>,
}

impl HolderDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one partial holder
    pub fn append(&self, key: ContributionKey, holder: Holder) {
        self.lock().push((key, holder));
    }

    /// Append a batch of partial holders under a single lock acquisition
    pub fn append_all<I>(&self, holders: I)
    where
        I: IntoIterator<Item = (ContributionKey, Holder)>,
    {
        self.lock().extend(holders);
    }

    /// Number of partial holders accumulated so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Fold all partials into one holder per identifier
    ///
    /// The accumulated partials are left in place for inspection.
    pub fn merge(&self) -> HolderMap {
        let entries = self.lock();

        let mut ordered: Vec<&(ContributionKey, Holder)> = entries.iter().collect();
        ordered.sort_by_key(|(key, _)| *key);

        let mut holders = HolderMap::with_capacity(ordered.len());
        for (_, partial) in ordered {
            match holders.entry(partial.id.clone()) {
                Entry::Occupied(mut merged) => {
                    let combined = merged.get().merged_with(partial);
                    merged.insert(combined);
                }
                Entry::Vacant(slot) => {
                    slot.insert(partial.clone());
                }
            }
        }

        debug!(
            "Merged {} partial holders into {} holders",
            entries.len(),
            holders.len()
        );
        holders
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(ContributionKey, Holder)>> {
        // A panicking appender cannot leave the vector half-written
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
