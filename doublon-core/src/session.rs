// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolution Session
//!
//! Stateful workflow over the pure grouping pipeline: run an analysis,
//! present groups, let the user pick a primary and merge or dismiss each
//! group. All state is session-local; dismissals in particular are not
//! persisted, so a fresh scan over the same data re-surfaces dismissed
//! groups.

use std::sync::Arc;

use crate::error::{DedupError, DedupResult};
use crate::events::{DedupEvent, EventDispatcher, EventHandler};
use crate::matching::{group_duplicates, DuplicateGroup, MatchConfig};
use crate::store::RecordStore;

/// A deduplication session over an external record store.
///
/// `analysis` distinguishes "not yet computed" (`None`) from "computed,
/// no duplicates found" (`Some` with an empty list) so callers can render
/// the two states differently.
pub struct DedupSession<S: RecordStore> {
    store: S,
    config: MatchConfig,
    events: EventDispatcher,
    analysis: Option<Vec<DuplicateGroup>>,
}

impl<S: RecordStore> DedupSession<S> {
    /// Creates a session with no analysis yet.
    pub fn new(store: S, config: MatchConfig) -> Self {
        DedupSession {
            store,
            config,
            events: EventDispatcher::new(),
            analysis: None,
        }
    }

    /// Resumes a session from previously computed groups.
    ///
    /// Used when the embedding layer persists groups between invocations
    /// (the CLI does this across scan/resolve runs).
    pub fn restore(store: S, config: MatchConfig, groups: Vec<DuplicateGroup>) -> Self {
        DedupSession {
            store,
            config,
            events: EventDispatcher::new(),
            analysis: Some(groups),
        }
    }

    /// Registers an event handler.
    pub fn add_event_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.events.add_handler(handler);
    }

    /// Returns the match configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the record set and recomputes groups from scratch.
    ///
    /// Returns the number of groups found. When the load fails, the error
    /// propagates and any previously computed groups are kept untouched -
    /// stale but valid beats a blank screen on a transient read failure.
    ///
    /// Grouping is O(N^2); callers trigger this on explicit user action or
    /// on a record-set change, not on every render.
    pub fn refresh(&mut self) -> DedupResult<usize> {
        let records = self.store.load_records()?;
        let groups = group_duplicates(&records, &self.config);
        let group_count = groups.len();
        self.analysis = Some(groups);
        self.events
            .dispatch(DedupEvent::AnalysisCompleted { group_count });
        Ok(group_count)
    }

    /// Returns true once an analysis has been run.
    pub fn is_analyzed(&self) -> bool {
        self.analysis.is_some()
    }

    /// Returns the active groups, or `None` before the first analysis.
    pub fn groups(&self) -> Option<&[DuplicateGroup]> {
        self.analysis.as_deref()
    }

    /// Finds an active group by ID or unambiguous ID prefix.
    pub fn find_group(&self, id_prefix: &str) -> Option<&DuplicateGroup> {
        let groups = self.analysis.as_deref()?;

        if let Some(exact) = groups.iter().find(|g| g.id() == id_prefix) {
            return Some(exact);
        }

        let mut matches = groups.iter().filter(|g| g.id().starts_with(id_prefix));
        match (matches.next(), matches.next()) {
            (Some(single), None) => Some(single),
            // No match, or ambiguous prefix
            _ => None,
        }
    }

    /// Selects the primary record of a group.
    ///
    /// A pure state transition - nothing is dispatched to the store until
    /// [`merge`](Self::merge).
    pub fn select_primary(&mut self, group_id: &str, record_id: &str) -> DedupResult<()> {
        let index = self.group_index(group_id)?;
        let groups = self.analysis.as_mut().expect("checked by group_index");
        let group = &mut groups[index];

        if !group.set_primary(record_id) {
            return Err(DedupError::RecordNotInGroup {
                group_id: group.id().to_string(),
                record_id: record_id.to_string(),
            });
        }
        Ok(())
    }

    /// Merges a group into its selected primary record.
    ///
    /// Dispatches `merge_records(primary, others)` to the store. On
    /// success the group leaves the active list. On failure it stays
    /// presented, unchanged, and the error is returned - no partial state,
    /// no automatic retry.
    pub fn merge(&mut self, group_id: &str) -> DedupResult<()> {
        let index = self.group_index(group_id)?;
        let (full_id, primary_id, duplicate_ids) = {
            let group = &self.analysis.as_deref().expect("checked by group_index")[index];
            (
                group.id().to_string(),
                group.primary().id().to_string(),
                group.duplicate_ids(),
            )
        };

        match self.store.merge_records(&primary_id, &duplicate_ids) {
            Ok(()) => {
                self.analysis
                    .as_mut()
                    .expect("checked by group_index")
                    .remove(index);
                self.events.dispatch(DedupEvent::GroupMerged {
                    group_id: full_id,
                    primary_id,
                    merged_ids: duplicate_ids,
                });
                Ok(())
            }
            Err(e) => {
                self.events.dispatch(DedupEvent::MergeFailed {
                    group_id: full_id,
                    error: e.to_string(),
                });
                Err(e.into())
            }
        }
    }

    /// Dismisses a group without merging.
    ///
    /// Removes it from the active list only. The decision is not
    /// persisted: a future grouping pass over the same data re-surfaces
    /// the same group. Durable dismissal would need an ignored-group
    /// ledger consulted by the grouper - an extension point, not part of
    /// this core.
    pub fn dismiss(&mut self, group_id: &str) -> DedupResult<()> {
        let index = self.group_index(group_id)?;
        let group = self
            .analysis
            .as_mut()
            .expect("checked by group_index")
            .remove(index);
        self.events.dispatch(DedupEvent::GroupDismissed {
            group_id: group.id().to_string(),
        });
        Ok(())
    }

    /// Resolves an ID or unambiguous prefix to a group index.
    fn group_index(&self, id_prefix: &str) -> DedupResult<usize> {
        let groups = self.analysis.as_deref().ok_or(DedupError::NotAnalyzed)?;

        if let Some(exact) = groups.iter().position(|g| g.id() == id_prefix) {
            return Ok(exact);
        }

        let mut matches = groups
            .iter()
            .enumerate()
            .filter(|(_, g)| g.id().starts_with(id_prefix));
        match (matches.next(), matches.next()) {
            (Some((index, _)), None) => Ok(index),
            _ => Err(DedupError::GroupNotFound(id_prefix.to_string())),
        }
    }
}
