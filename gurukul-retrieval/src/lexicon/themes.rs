//! Theme and concept dictionaries. Order is significant: it fixes the order
//! of themes and concepts in a profile and therefore in the enhanced query.

/// Theme → keywords. A theme matches when any keyword is a substring of the
/// lowercased question.
pub const THEME_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "dharma",
        &["dharma", "duty", "righteous", "virtue", "moral"],
    ),
    ("karma", &["karma", "action", "deed", "consequence"]),
    (
        "peace",
        &["peace", "calm", "tranquil", "serenity", "stillness", "equanimity"],
    ),
    (
        "devotion",
        &["devotion", "bhakti", "worship", "surrender", "prayer"],
    ),
    (
        "knowledge",
        &["knowledge", "wisdom", "jnana", "truth", "understanding"],
    ),
    ("self", &["atman", "soul", "consciousness", "the self"]),
    (
        "liberation",
        &["liberation", "moksha", "freedom", "enlightenment", "salvation"],
    ),
    (
        "suffering",
        &["suffering", "pain", "grief", "sorrow", "fear", "anxiety"],
    ),
    (
        "meditation",
        &["meditation", "meditate", "yoga", "breath", "mindfulness", "dhyana"],
    ),
];

/// Concept → keywords. A concept matches when a whitespace token of the
/// question equals one of its keywords.
pub const CONCEPT_KEYWORDS: &[(&str, &[&str])] = &[
    ("agni", &["agni", "fire", "flame"]),
    ("indra", &["indra", "thunder", "strength", "courage"]),
    ("yajna", &["yajna", "ritual", "offering", "sacrifice"]),
    ("brahman", &["brahman", "absolute", "infinite"]),
    ("guru", &["guru", "teacher", "master", "disciple"]),
    ("mantra", &["mantra", "chant", "hymn", "recitation"]),
    ("ahimsa", &["ahimsa", "nonviolence", "compassion", "kindness"]),
    ("prana", &["prana", "breath", "breathing", "life-force"]),
];

/// Whether `name` is a known theme.
pub fn is_theme(name: &str) -> bool {
    THEME_KEYWORDS.iter().any(|(theme, _)| *theme == name)
}
