//! Preference-ranked ordering for artwork candidates.
//!
//! Candidates are ordered by a language preference score, then community
//! rating, then vote count, all descending. The sort is stable, so ties
//! beyond the vote count keep their original relative order.

use crate::domain::entities::ArtworkCandidate;

/// Scores a candidate's language against the caller's preference.
///
/// - 3: exact case-insensitive match
/// - 3: no language, when the preferred language is English
/// - 2: English candidate, when the preferred language is not English
/// - 2: no language, when the preferred language is not English
/// - 0: any other language
fn language_score(language: Option<&str>, preferred_language: &str) -> i32 {
    let preferred_is_english = preferred_language.eq_ignore_ascii_case("en");
    let language = language.unwrap_or("");

    if !language.is_empty() && language.eq_ignore_ascii_case(preferred_language) {
        return 3;
    }

    if !preferred_is_english && language.eq_ignore_ascii_case("en") {
        return 2;
    }

    if language.is_empty() {
        return if preferred_is_english { 3 } else { 2 };
    }

    0
}

/// Orders candidates by language preference, rating, and vote count.
///
/// Pure and deterministic: ranking the same list twice yields the same
/// order. Absent ratings and vote counts are treated as zero.
pub fn rank(
    mut candidates: Vec<ArtworkCandidate>,
    preferred_language: &str,
) -> Vec<ArtworkCandidate> {
    candidates.sort_by(|a, b| {
        let score_a = language_score(a.language.as_deref(), preferred_language);
        let score_b = language_score(b.language.as_deref(), preferred_language);

        score_b
            .cmp(&score_a)
            .then_with(|| {
                b.community_rating
                    .unwrap_or(0.0)
                    .total_cmp(&a.community_rating.unwrap_or(0.0))
            })
            .then_with(|| b.vote_count.unwrap_or(0).cmp(&a.vote_count.unwrap_or(0)))
    });
    candidates
}
