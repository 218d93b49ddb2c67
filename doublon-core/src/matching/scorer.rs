// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Similarity Scorer
//!
//! Computes a weighted match score and human-readable reasons for a pair of
//! records. Scoring is additive over independent signals, clamped to 1.0,
//! deterministic and symmetric in its arguments.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::distance::similarity;
use super::grouper::GroupingStrategy;
use super::normalize::{normalize_email, normalize_name, normalize_phone};
use crate::record::ContactRecord;

/// Tunable weights and thresholds for duplicate matching.
///
/// The defaults reproduce the production configuration, but none of the
/// numbers are load-bearing for the algorithm itself - deployments tune
/// them per data quality. Serializable so a deployment can ship its own
/// table as JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum pair score for two records to land in the same group.
    pub duplicate_threshold: f64,
    /// Contribution of an identical (normalized) email.
    pub email_weight: f64,
    /// Name similarity at or above this counts as "similar name".
    pub similar_name_threshold: f64,
    /// Contribution of a similar name.
    pub similar_name_weight: f64,
    /// Name similarity at or above this (but below the similar tier)
    /// counts as "close name".
    pub close_name_threshold: f64,
    /// Contribution of a close name.
    pub close_name_weight: f64,
    /// Contribution of an identical (normalized) phone number.
    pub phone_weight: f64,
    /// Contribution of an identical (case-insensitive) company name.
    pub company_weight: f64,
    /// Country prefix substituted for a single leading `0` in phone
    /// numbers. `+33` matches the French market this started in.
    pub phone_country_prefix: String,
    /// Grouping strategy used when partitioning the record set.
    pub strategy: GroupingStrategy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            duplicate_threshold: 0.6,
            email_weight: 0.5,
            similar_name_threshold: 0.8,
            similar_name_weight: 0.3,
            close_name_threshold: 0.6,
            close_name_weight: 0.2,
            phone_weight: 0.3,
            company_weight: 0.1,
            phone_country_prefix: "+33".to_string(),
            strategy: GroupingStrategy::TransitiveClosure,
        }
    }
}

impl MatchConfig {
    /// Overrides the duplicate threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.duplicate_threshold = threshold;
        self
    }

    /// Overrides the grouping strategy.
    pub fn with_strategy(mut self, strategy: GroupingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Overrides the phone country prefix.
    pub fn with_phone_country_prefix(mut self, prefix: &str) -> Self {
        self.phone_country_prefix = prefix.to_string();
        self
    }
}

/// Why a pair of records matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    /// Normalized emails are equal.
    IdenticalEmail,
    /// Full-name similarity reached the upper tier.
    SimilarName,
    /// Full-name similarity reached the lower tier only.
    CloseName,
    /// Normalized phone numbers are equal.
    IdenticalPhone,
    /// Company names are equal, ignoring case.
    SameCompany,
    /// No signal fired. Such pairs score 0 and never cross the
    /// grouping threshold.
    PartialMatch,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchReason::IdenticalEmail => "identical email",
            MatchReason::SimilarName => "similar name",
            MatchReason::CloseName => "close name",
            MatchReason::IdenticalPhone => "identical phone",
            MatchReason::SameCompany => "same company",
            MatchReason::PartialMatch => "partial match",
        };
        write!(f, "{}", label)
    }
}

/// Result of scoring one pair of records.
///
/// Transient - produced fresh per pair, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchResult {
    score: f64,
    reasons: Vec<MatchReason>,
}

impl MatchResult {
    /// Returns the clamped score in `[0, 1]`.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Returns the reasons in rule authorship order.
    pub fn reasons(&self) -> &[MatchReason] {
        &self.reasons
    }

    /// Returns the first reason, or [`MatchReason::PartialMatch`] when no
    /// signal fired.
    pub fn primary_reason(&self) -> MatchReason {
        self.reasons
            .first()
            .copied()
            .unwrap_or(MatchReason::PartialMatch)
    }

    /// Renders the reasons as a single human-readable string.
    pub fn reason_summary(&self) -> String {
        if self.reasons.is_empty() {
            return MatchReason::PartialMatch.to_string();
        }
        self.reasons
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Scores a pair of records against the configured weight table.
///
/// Absent optional fields disable the corresponding signal; they are never
/// an error. Only one name tier applies - the higher threshold wins.
pub fn score_pair(a: &ContactRecord, b: &ContactRecord, config: &MatchConfig) -> MatchResult {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    if let (Some(email_a), Some(email_b)) = (a.email(), b.email()) {
        if normalize_email(email_a) == normalize_email(email_b) {
            score += config.email_weight;
            reasons.push(MatchReason::IdenticalEmail);
        }
    }

    let name_a = normalize_name(&a.full_name());
    let name_b = normalize_name(&b.full_name());
    // Two records with no name at all should not count as a name match.
    if !(name_a.is_empty() && name_b.is_empty()) {
        let name_similarity = similarity(&name_a, &name_b);
        if name_similarity >= config.similar_name_threshold {
            score += config.similar_name_weight;
            reasons.push(MatchReason::SimilarName);
        } else if name_similarity >= config.close_name_threshold {
            score += config.close_name_weight;
            reasons.push(MatchReason::CloseName);
        }
    }

    if let (Some(phone_a), Some(phone_b)) = (a.phone(), b.phone()) {
        let prefix = &config.phone_country_prefix;
        if normalize_phone(phone_a, prefix) == normalize_phone(phone_b, prefix) {
            score += config.phone_weight;
            reasons.push(MatchReason::IdenticalPhone);
        }
    }

    if let (Some(company_a), Some(company_b)) = (a.company(), b.company()) {
        if company_a.to_lowercase() == company_b.to_lowercase() {
            score += config.company_weight;
            reasons.push(MatchReason::SameCompany);
        }
    }

    MatchResult {
        score: score.min(1.0),
        reasons,
    }
}
