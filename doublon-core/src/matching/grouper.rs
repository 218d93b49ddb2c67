// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Duplicate Grouper
//!
//! Partitions a full record set into duplicate groups using pairwise
//! scores. Pure computation: O(N^2) comparisons, no I/O, no shared state
//! between runs, so concurrent passes over different snapshots need no
//! coordination.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::scorer::{score_pair, MatchConfig, MatchReason};
use crate::record::ContactRecord;

/// How the grouper turns pairwise matches into groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingStrategy {
    /// Single-pass greedy clustering: each unprocessed record acts as a
    /// pivot and pulls in every later unprocessed record that matches it
    /// directly. A-B and B-C matches without an A-C match end up in
    /// separate groups when A is the pivot. Kept for compatibility with
    /// the original pivot-order-dependent behavior.
    Greedy,
    /// Union-find over all pairs above threshold, emitting connected
    /// components. Guarantees transitive closure: A-B plus B-C puts
    /// A, B and C in one group regardless of pivot order. The default.
    TransitiveClosure,
}

/// A group of records believed to represent the same real-world contact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// Session-local identifier, stable across serialization.
    id: String,
    /// Members in input order, always at least two.
    records: Vec<ContactRecord>,
    /// Highest pairwise score that triggered inclusion.
    match_score: f64,
    /// Reason attached to that highest-scoring pair.
    match_reason: MatchReason,
    /// Index of the merge-primary candidate. Defaults to the first record.
    #[serde(default)]
    primary_index: usize,
}

impl DuplicateGroup {
    fn new(records: Vec<ContactRecord>, match_score: f64, match_reason: MatchReason) -> Self {
        debug_assert!(records.len() >= 2);
        DuplicateGroup {
            id: Uuid::new_v4().to_string(),
            records,
            match_score,
            match_reason,
            primary_index: 0,
        }
    }

    /// Returns the group's session-local ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the member records in input order.
    pub fn records(&self) -> &[ContactRecord] {
        &self.records
    }

    /// Returns the representative match score.
    pub fn match_score(&self) -> f64 {
        self.match_score
    }

    /// Returns the representative match reason.
    pub fn match_reason(&self) -> MatchReason {
        self.match_reason
    }

    /// Returns the currently selected primary record.
    pub fn primary(&self) -> &ContactRecord {
        &self.records[self.primary_index]
    }

    /// Selects the primary record by ID.
    ///
    /// Returns `false` when the ID is not a member of this group; the
    /// previous selection is kept in that case.
    pub fn set_primary(&mut self, record_id: &str) -> bool {
        match self.records.iter().position(|r| r.id() == record_id) {
            Some(index) => {
                self.primary_index = index;
                true
            }
            None => false,
        }
    }

    /// Returns the IDs of all members except the primary.
    pub fn duplicate_ids(&self) -> Vec<String> {
        self.records
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.primary_index)
            .map(|(_, r)| r.id().to_string())
            .collect()
    }

    /// Returns true when `record_id` is a member of this group.
    pub fn contains(&self, record_id: &str) -> bool {
        self.records.iter().any(|r| r.id() == record_id)
    }
}

/// Partitions `records` into duplicate groups.
///
/// Returns groups sorted by representative score, descending; the sort is
/// stable, so tie order is reproducible within a pass. Lists of size 0 or
/// 1 yield no groups.
pub fn group_duplicates(records: &[ContactRecord], config: &MatchConfig) -> Vec<DuplicateGroup> {
    let mut groups = match config.strategy {
        GroupingStrategy::Greedy => group_greedy(records, config),
        GroupingStrategy::TransitiveClosure => group_transitive(records, config),
    };

    groups.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    groups
}

/// Single-pass greedy clustering around successive pivots.
fn group_greedy(records: &[ContactRecord], config: &MatchConfig) -> Vec<DuplicateGroup> {
    let mut groups = Vec::new();
    let mut processed: HashSet<usize> = HashSet::new();

    for i in 0..records.len() {
        if processed.contains(&i) {
            continue;
        }

        let mut members = vec![i];
        let mut best_score = 0.0;
        let mut best_reason = MatchReason::PartialMatch;

        for j in (i + 1)..records.len() {
            if processed.contains(&j) {
                continue;
            }

            let result = score_pair(&records[i], &records[j], config);
            if result.score() >= config.duplicate_threshold {
                members.push(j);
                processed.insert(j);
                if result.score() > best_score {
                    best_score = result.score();
                    best_reason = result.primary_reason();
                }
            }
        }

        if members.len() > 1 {
            processed.insert(i);
            let group_records = members.iter().map(|&k| records[k].clone()).collect();
            groups.push(DuplicateGroup::new(group_records, best_score, best_reason));
        }
    }

    groups
}

/// Union-find clustering: connected components of the above-threshold
/// match graph.
fn group_transitive(records: &[ContactRecord], config: &MatchConfig) -> Vec<DuplicateGroup> {
    let mut sets = DisjointSets::new(records.len());
    // (i, j, score, reason) for every pair above threshold
    let mut edges: Vec<(usize, usize, f64, MatchReason)> = Vec::new();

    for i in 0..records.len() {
        for j in (i + 1)..records.len() {
            let result = score_pair(&records[i], &records[j], config);
            if result.score() >= config.duplicate_threshold {
                sets.union(i, j);
                edges.push((i, j, result.score(), result.primary_reason()));
            }
        }
    }

    // Collect components in input order of their first member.
    let mut components: HashMap<usize, Vec<usize>> = HashMap::new();
    let mut component_order: Vec<usize> = Vec::new();
    for i in 0..records.len() {
        let root = sets.find(i);
        let members = components.entry(root).or_insert_with(|| {
            component_order.push(root);
            Vec::new()
        });
        members.push(i);
    }

    // Representative score/reason per component: the best edge inside it.
    let mut best: HashMap<usize, (f64, MatchReason)> = HashMap::new();
    for &(i, _, score, reason) in &edges {
        let root = sets.find(i);
        match best.get(&root) {
            Some((current, _)) if *current >= score => {}
            _ => {
                best.insert(root, (score, reason));
            }
        }
    }

    let mut groups = Vec::new();
    for root in component_order {
        let members = &components[&root];
        if members.len() < 2 {
            continue;
        }
        let (score, reason) = best[&root];
        let group_records = members.iter().map(|&k| records[k].clone()).collect();
        groups.push(DuplicateGroup::new(group_records, score, reason));
    }

    groups
}

/// Disjoint-set forest with path compression and union by size.
struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        DisjointSets {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }
        let (small, large) = if self.size[root_a] < self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
    }
}
