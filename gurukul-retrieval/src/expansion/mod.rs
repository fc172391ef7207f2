//! Query enhancement: themes, concepts and entities expanded through the
//! root lexicon, followed by a fixed retrieval suffix.

pub mod root_expander;

use gurukul_core::models::EnhancedQuery;
use gurukul_core::SemanticProfile;

/// Generic terms appended to every query.
pub const QUERY_SUFFIX: &str = "sanskrit verse translation interpretation scripture";

/// Request context key holding an optional backend filter expression.
pub const SCOPE_CONTEXT_KEY: &str = "scope";

/// Build the enhanced query for a profile. Deterministic and infallible.
///
/// `user_query` is the question the profile was built from.
pub fn enhance(profile: &SemanticProfile, user_query: &str) -> EnhancedQuery {
    let theme_expansions = root_expander::expand_group(&profile.themes);
    let concept_expansions = root_expander::expand_group(&profile.concepts);
    let entity_expansions = root_expander::expand_group(&profile.entities);

    let final_query_string = [
        &theme_expansions,
        &concept_expansions,
        &entity_expansions,
    ]
    .iter()
    .filter(|group| !group.is_empty())
    .map(|group| group.join(" "))
    .chain(std::iter::once(QUERY_SUFFIX.to_string()))
    .collect::<Vec<_>>()
    .join(" ")
    .trim()
    .to_string();

    let scoping_filter = profile
        .context
        .get(SCOPE_CONTEXT_KEY)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    EnhancedQuery {
        user_query: user_query.to_string(),
        theme_expansions,
        concept_expansions,
        entity_expansions,
        final_query_string,
        scoping_filter,
    }
}

/// The query string alone.
pub fn enhance_query(profile: &SemanticProfile) -> String {
    enhance(profile, "").final_query_string
}
