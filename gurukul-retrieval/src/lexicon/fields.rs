//! Semantic fields and marker tables used by the relevance scorer.

/// Named semantic fields. A field is active when any keyword is a substring
/// of the lowercased fragment or question.
pub const SEMANTIC_FIELDS: &[(&str, &[&str])] = &[
    (
        "spiritual_practice",
        &["meditation", "yoga", "prayer", "worship", "dhyāna", "dhyana", "sādhana", "sadhana", "tapas"],
    ),
    (
        "ethics",
        &["dharma", "duty", "righteous", "virtue", "karma"],
    ),
    (
        "liberation",
        &["mokṣa", "moksha", "liberation", "freedom", "nirvāṇa", "nirvana", "mukti"],
    ),
    (
        "devotion",
        &["bhakti", "devotion", "surrender", "grace", "beloved"],
    ),
    (
        "knowledge",
        &["jñāna", "jnana", "wisdom", "knowledge", "truth", "vidyā", "vidya"],
    ),
    (
        "cosmology",
        &["brahman", "creation", "cosmos", "universe", "agni", "indra", "deva"],
    ),
    (
        "inner_peace",
        &["peace", "śānti", "shanti", "calm", "tranquil", "equanimity"],
    ),
];

/// Theological marker categories: scriptural authority, invocation,
/// narrative citation, practice terms. Each keyword found in the fragment
/// counts once.
pub const THEOLOGICAL_MARKERS: &[(&str, &[&str])] = &[
    (
        "scriptural_authority",
        &["veda", "upaniṣad", "upanishad", "gītā", "gita", "sūtra", "sutra", "purāṇa", "purana", "śruti", "shruti", "smṛti", "smriti"],
    ),
    (
        "invocation",
        &["oṃ", "aum", "namaḥ", "namah", "namaste", "svāhā", "svaha", "swaha"],
    ),
    (
        "narrative_citation",
        &["said", "spoke", "declared", "taught", "narrated", "replied"],
    ),
    (
        "practice",
        &["yajña", "yajna", "sacrifice", "offering", "ritual", "mantra", "japa", "pūjā", "puja"],
    ),
];

/// Explicit transliteration label counted as an authenticity marker.
pub const AUTHENTICITY_LABELS: &[&str] = &["Sanskrit Transliteration:"];
