// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Exclusion-aware notification selection.
//!
//! When an opportunity is cancelled or fulfilled, a cancellation notice
//! goes to the remaining candidates, minus a caller-supplied exclusion set
//! (typically the actor who caused the cancellation or already claimed the
//! slot). Candidates come from two sources merged by chat identity.

use serde::{Deserialize, Serialize};

/// Where a cancellation candidate was sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    /// Bound to a notification identity directly via their profile.
    Profile,
    /// Recorded in the provisional-selection-state store.
    Provisional,
}

/// One candidate for a cancellation notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The candidate's roster name.
    pub member_name: String,
    /// The underlying chat identity the notice would be delivered to.
    pub channel_identity: String,
    /// Where this candidate was sourced from.
    pub source: CandidateSource,
}

impl Candidate {
    /// Creates a new `Candidate`.
    #[must_use]
    pub const fn new(
        member_name: String,
        channel_identity: String,
        source: CandidateSource,
    ) -> Self {
        Self {
            member_name,
            channel_identity,
            source,
        }
    }
}

/// The result of a cancellation selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationSelection {
    /// Candidates remaining after exclusion, in pool order.
    pub recipients: Vec<Candidate>,
    /// Size of the merged candidate pool.
    pub total_candidates: usize,
    /// Number of candidates removed by the exclusion set.
    pub excluded_count: usize,
    /// Number of remaining recipients.
    pub eligible_count: usize,
}

/// Merges profile-sourced and provisional-sourced candidates into one pool,
/// deduplicated by the underlying chat identity.
///
/// Profile-sourced candidates take precedence on conflict. Order is stable:
/// profile candidates first, then provisional candidates whose identity was
/// not already present.
#[must_use]
pub fn merge_candidate_pool(
    profile: Vec<Candidate>,
    provisional: Vec<Candidate>,
) -> Vec<Candidate> {
    let mut pool: Vec<Candidate> = Vec::with_capacity(profile.len() + provisional.len());
    for candidate in profile.into_iter().chain(provisional) {
        if pool
            .iter()
            .any(|c| c.channel_identity == candidate.channel_identity)
        {
            continue;
        }
        pool.push(candidate);
    }
    pool
}

/// Selects the recipients of a cancellation notice from a candidate pool.
///
/// A candidate is included iff its roster name is not present in
/// `exclude_names` (case-sensitive exact match). Excluding a name absent
/// from the pool is a no-op, not an error.
#[must_use]
pub fn select_for_cancellation(
    pool: Vec<Candidate>,
    exclude_names: &[String],
) -> CancellationSelection {
    let total_candidates: usize = pool.len();
    let recipients: Vec<Candidate> = pool
        .into_iter()
        .filter(|c| !exclude_names.iter().any(|name| *name == c.member_name))
        .collect();
    let eligible_count: usize = recipients.len();
    let excluded_count: usize = total_candidates - eligible_count;
    CancellationSelection {
        recipients,
        total_candidates,
        excluded_count,
        eligible_count,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn profile(name: &str, identity: &str) -> Candidate {
        Candidate::new(
            String::from(name),
            String::from(identity),
            CandidateSource::Profile,
        )
    }

    fn provisional(name: &str, identity: &str) -> Candidate {
        Candidate::new(
            String::from(name),
            String::from(identity),
            CandidateSource::Provisional,
        )
    }

    #[test]
    fn test_exclusion_removes_exactly_named_members() {
        let pool = vec![
            profile("趙七", "U001"),
            profile("錢八", "U002"),
            profile("孫九", "U003"),
            profile("李四", "U004"),
            profile("周十", "U005"),
        ];
        let exclude = vec![
            String::from("趙七"),
            String::from("錢八"),
            String::from("孫九"),
        ];

        let selection = select_for_cancellation(pool, &exclude);

        assert_eq!(selection.total_candidates, 5);
        assert_eq!(selection.excluded_count, 3);
        assert_eq!(selection.eligible_count, 2);
        let names: Vec<&str> = selection
            .recipients
            .iter()
            .map(|c| c.member_name.as_str())
            .collect();
        assert_eq!(names, vec!["李四", "周十"]);
    }

    #[test]
    fn test_excluding_absent_name_is_noop() {
        let pool = vec![profile("趙七", "U001"), profile("錢八", "U002")];
        let exclude = vec![String::from("不存在")];

        let selection = select_for_cancellation(pool.clone(), &exclude);

        assert_eq!(selection.recipients, pool);
        assert_eq!(selection.excluded_count, 0);
        assert_eq!(selection.eligible_count, 2);
    }

    #[test]
    fn test_empty_exclusion_keeps_whole_pool() {
        let pool = vec![profile("趙七", "U001")];
        let selection = select_for_cancellation(pool.clone(), &[]);
        assert_eq!(selection.recipients, pool);
    }

    #[test]
    fn test_exclusion_is_case_sensitive_exact_match() {
        let pool = vec![profile("Amy", "U001")];
        let selection = select_for_cancellation(pool.clone(), &[String::from("amy")]);
        assert_eq!(selection.recipients, pool);
    }

    #[test]
    fn test_merge_dedups_by_chat_identity() {
        let merged = merge_candidate_pool(
            vec![profile("趙七", "U001")],
            vec![provisional("趙七", "U001"), provisional("錢八", "U002")],
        );

        assert_eq!(merged.len(), 2);
        // Profile source wins on identity conflict
        assert_eq!(merged[0].source, CandidateSource::Profile);
        assert_eq!(merged[1].member_name, "錢八");
    }

    #[test]
    fn test_merge_keeps_profile_first_order() {
        let merged = merge_candidate_pool(
            vec![profile("a", "U001"), profile("b", "U002")],
            vec![provisional("c", "U003")],
        );
        let identities: Vec<&str> = merged.iter().map(|c| c.channel_identity.as_str()).collect();
        assert_eq!(identities, vec!["U001", "U002", "U003"]);
    }

    #[test]
    fn test_merge_dedups_within_one_source() {
        let merged = merge_candidate_pool(
            vec![profile("a", "U001"), profile("a-again", "U001")],
            vec![],
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].member_name, "a");
    }
}
