//! Sanskrit/IAST term extraction from arbitrary text.
//!
//! A fixed battery of patterns is run over the text and the matches are
//! unioned, normalized to lowercase, deduplicated and length-filtered.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use gurukul_core::constants::MIN_TERM_CHARS;
use regex::Regex;

macro_rules! term_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Words carrying at least one IAST diacritic ───────────────────────────────
term_pattern!(
    RE_IAST_WORD,
    r"(?i)[a-zāīūṛṝḷḹṃṁḥṅñṇṭḍśṣ]*[āīūṛṝḷḹṃṁḥṅñṇṭḍśṣ][a-zāīūṛṝḷḹṃṁḥṅñṇṭḍśṣ]*"
);

// ── ASCII transliteration: aspirate/palatal clusters with a vowel ending ─────
term_pattern!(
    RE_ASCII_CLUSTER,
    r"(?i)\b[a-z]*(?:bh|dh|gh|jn|ksh|sh|th|ny)[a-z]*(?:a|i|u|am|ah)\b"
);

// ── Named deity/concept roots with inflection tolerance ──────────────────────
term_pattern!(
    RE_NAMED_ROOT,
    r"(?i)\b(?:dharm|karm|mok[sṣ]|[aā]tm|brahm|yog|bhakt|j[nñ][aā]n|[sś][aā]nt|agn|indr|ved|gur|mantr|yaj[nñ]|sam[aā]dh|dhy[aā]n|pr[aā][nṇ])[a-zāīūṛṃṁḥṇñśṣ]*\b"
);

fn battery() -> [&'static LazyLock<Option<Regex>>; 3] {
    [&RE_IAST_WORD, &RE_ASCII_CLUSTER, &RE_NAMED_ROOT]
}

/// Extract normalized terms longer than two characters.
pub fn extract_terms(text: &str) -> BTreeSet<String> {
    let mut terms = BTreeSet::new();
    for pattern in battery() {
        let Some(re) = pattern.as_ref() else {
            continue;
        };
        for m in re.find_iter(text) {
            let term = m.as_str().to_lowercase();
            if term.chars().count() >= MIN_TERM_CHARS {
                terms.insert(term);
            }
        }
    }
    terms
}
