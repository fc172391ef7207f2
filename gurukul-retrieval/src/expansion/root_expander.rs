//! Root-synonym expansion: an item pulls in every synonym set of a root
//! that shares a synonym with it.

use crate::lexicon::ROOT_EXPANSIONS;

/// Expand one item: the item itself, then the full synonym set of every
/// root with a synonym that is a case-insensitive substring of the item.
pub fn expand_item(item: &str) -> Vec<String> {
    let lower = item.to_lowercase();
    let mut out = vec![item.to_string()];
    for (_, synonyms) in ROOT_EXPANSIONS {
        if synonyms.iter().any(|s| lower.contains(&s.to_lowercase())) {
            out.extend(synonyms.iter().map(|s| s.to_string()));
        }
    }
    out
}

/// Expand every item of a group, keeping item order.
pub fn expand_group(items: &[String]) -> Vec<String> {
    items.iter().flat_map(|item| expand_item(item)).collect()
}
