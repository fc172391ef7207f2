//! Curated term vectors for lexical similarity.
//!
//! Axes: ethics, action, transcendence, devotion, knowledge, ritual.
//! Keys are diacritic-folded ASCII; common ASCII spellings map to a key
//! through `ALIASES`.

pub const TERM_VECTOR_DIMS: usize = 6;

const TERM_VECTORS: &[(&str, [f32; TERM_VECTOR_DIMS])] = &[
    ("dharma", [0.90, 0.50, 0.20, 0.20, 0.30, 0.30]),
    ("karma", [0.60, 0.90, 0.20, 0.10, 0.20, 0.30]),
    ("moksa", [0.20, 0.10, 0.95, 0.30, 0.50, 0.10]),
    ("atman", [0.10, 0.10, 0.80, 0.20, 0.70, 0.10]),
    ("brahman", [0.10, 0.10, 0.80, 0.30, 0.60, 0.40]),
    ("yoga", [0.30, 0.60, 0.60, 0.30, 0.40, 0.10]),
    ("bhakti", [0.30, 0.20, 0.40, 0.95, 0.10, 0.30]),
    ("jnana", [0.20, 0.10, 0.60, 0.10, 0.95, 0.10]),
    ("santi", [0.30, 0.10, 0.70, 0.30, 0.30, 0.10]),
    ("agni", [0.10, 0.30, 0.10, 0.50, 0.10, 0.90]),
    ("indra", [0.20, 0.60, 0.10, 0.40, 0.10, 0.80]),
    ("veda", [0.40, 0.10, 0.20, 0.30, 0.70, 0.70]),
    ("guru", [0.40, 0.20, 0.30, 0.50, 0.80, 0.10]),
    ("mantra", [0.10, 0.20, 0.20, 0.60, 0.30, 0.80]),
    ("yajna", [0.30, 0.50, 0.10, 0.40, 0.10, 0.90]),
    ("samadhi", [0.10, 0.10, 0.90, 0.30, 0.50, 0.00]),
    ("dhyana", [0.10, 0.20, 0.80, 0.30, 0.50, 0.00]),
    ("prana", [0.10, 0.40, 0.50, 0.10, 0.30, 0.30]),
];

const ALIASES: &[(&str, &str)] = &[
    ("moksha", "moksa"),
    ("mukti", "moksa"),
    ("shanti", "santi"),
    ("atma", "atman"),
    ("brahma", "brahman"),
    ("gnana", "jnana"),
    ("yagna", "yajna"),
    ("yajnya", "yajna"),
];

/// Fold IAST diacritics to plain ASCII letters and lowercase the result.
pub fn fold_diacritics(term: &str) -> String {
    term.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| match c {
            'ā' | 'á' | 'à' => 'a',
            'ī' | 'í' | 'ì' => 'i',
            'ū' | 'ú' | 'ù' => 'u',
            'ṛ' | 'ṝ' => 'r',
            'ḷ' | 'ḹ' => 'l',
            'ē' | 'é' => 'e',
            'ō' | 'ó' => 'o',
            'ṃ' | 'ṁ' => 'm',
            'ḥ' => 'h',
            'ṅ' | 'ñ' | 'ṇ' => 'n',
            'ṭ' => 't',
            'ḍ' => 'd',
            'ś' | 'ṣ' => 's',
            other => other,
        })
        .collect()
}

fn lookup(key: &str) -> Option<&'static [f32; TERM_VECTOR_DIMS]> {
    let key = ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(key);
    TERM_VECTORS
        .iter()
        .find(|(term, _)| *term == key)
        .map(|(_, v)| v)
}

/// Vector for a term, if the curated lexicon knows it.
///
/// Tries the folded term, then the term without a final visarga/anusvara
/// (`dharmaḥ` → `dharma`, `brahmam` → `brahma`).
pub fn term_vector(term: &str) -> Option<&'static [f32; TERM_VECTOR_DIMS]> {
    let folded = fold_diacritics(term);
    lookup(&folded).or_else(|| {
        folded
            .strip_suffix('h')
            .or_else(|| folded.strip_suffix('m'))
            .and_then(lookup)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_iast_to_ascii() {
        assert_eq!(fold_diacritics("Mokṣa"), "moksa");
        assert_eq!(fold_diacritics("jñāna"), "jnana");
        assert_eq!(fold_diacritics("śānti"), "santi");
        assert_eq!(fold_diacritics("ṛgveda"), "rgveda");
    }

    #[test]
    fn spellings_share_one_vector() {
        let a = term_vector("mokṣa").unwrap();
        let b = term_vector("moksha").unwrap();
        let c = term_vector("MOKSA").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn final_visarga_is_tolerated() {
        assert_eq!(term_vector("dharmaḥ"), term_vector("dharma"));
    }

    #[test]
    fn unknown_terms_have_no_vector() {
        assert!(term_vector("purohitam").is_none());
        assert!(term_vector("").is_none());
    }
}
