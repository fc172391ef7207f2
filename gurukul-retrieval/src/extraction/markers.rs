//! Label, reference and Sanskrit-run patterns shared by extraction and
//! scoring.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! marker_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Labelled lines ───────────────────────────────────────────────────────────
marker_pattern!(
    RE_SANSKRIT_LABEL,
    r"(?m)Sanskrit Transliteration:[ \t]*(.+?)[ \t]*$"
);
marker_pattern!(RE_TRANSLATION_LABEL, r"(?m)\bTranslation:[ \t]*(.+?)[ \t]*$");
marker_pattern!(
    RE_INTERPRETATION_LABEL,
    r"(?m)\bInterpretation:[ \t]*(.+?)[ \t]*$"
);

// ── Collections and verse locators ───────────────────────────────────────────
marker_pattern!(
    RE_COLLECTION,
    r"(?:\p{Lu}\w*[ \t]+)*(?:Veda|Upani[sṣ]h?ad|G[iī]t[aā]|Pur[aā][nṇ]a|S[uū]tras?|R[aā]m[aā]ya[nṇ]a|Mah[aā]bh[aā]rata|Sa[mṃ]hit[aā])\b"
);
marker_pattern!(
    RE_REFERENCE,
    r"(?:\p{Lu}\w*[ \t]+)*(?:Veda|Upani[sṣ]h?ad|G[iī]t[aā]|Pur[aā][nṇ]a|S[uū]tras?|R[aā]m[aā]ya[nṇ]a|Mah[aā]bh[aā]rata|Sa[mṃ]hit[aā])(?:[^\n]*?\bVerse[ \t]+|[ \t,]+)(?:॥[ \t]*)?[0-9०-९]+(?:[.:][0-9०-९]+)*(?:[ \t]*॥)?"
);
marker_pattern!(RE_VERSE_NUMBER, r"(?i)\bverse[ \t]+[0-9०-९]");

// ── Romanized Sanskrit runs ──────────────────────────────────────────────────
marker_pattern!(
    RE_LATIN_RUN,
    r"[A-Za-zāīūṛṝḷḹṃṁḥṅñṇṭḍśṣĀĪŪṚṜḶḸṂṀḤṄÑṆṬḌŚṢ' ]+"
);

const IAST_DIACRITICS: &str = "āīūṛṝḷḹṃṁḥṅñṇṭḍśṣĀĪŪṚṜḶḸṂṀḤṄÑṆṬḌŚṢ";

/// Whether a pattern matches. A pattern that failed to compile never matches.
pub fn is_match(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

/// First capture group of a labelled line, trimmed. Empty values count as absent.
pub fn labelled(pattern: &LazyLock<Option<Regex>>, text: &str) -> Option<String> {
    let re = pattern.as_ref()?;
    re.captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Canonical verse reference in `text`, with Devanagari numerals and dandas
/// normalized.
pub fn find_reference(text: &str) -> Option<String> {
    let re = RE_REFERENCE.as_ref()?;
    let m = re.find(text)?;
    let reference = normalize_devanagari(m.as_str());
    (!reference.is_empty()).then_some(reference)
}

/// Longest run of Latin and IAST letters containing at least one diacritic.
/// Earlier runs win ties.
pub fn longest_sanskrit_run(text: &str) -> Option<String> {
    let re = RE_LATIN_RUN.as_ref()?;
    let mut best: Option<&str> = None;
    for m in re.find_iter(text) {
        let run = m.as_str().trim();
        if !run.chars().any(|c| IAST_DIACRITICS.contains(c)) {
            continue;
        }
        if best.map_or(true, |b| run.chars().count() > b.chars().count()) {
            best = Some(run);
        }
    }
    best.map(str::to_string)
}

/// Devanagari digits to ASCII, dandas dropped, whitespace collapsed.
pub fn normalize_devanagari(text: &str) -> String {
    let mapped: String = text
        .chars()
        .filter(|c| *c != '॥' && *c != '।')
        .map(|c| match c {
            '०'..='९' => char::from_u32(c as u32 - '०' as u32 + '0' as u32).unwrap_or(c),
            other => other,
        })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}
