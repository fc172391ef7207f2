//! Sanskrit root → synonym sets used for query expansion.
//!
//! An item pulls in a whole set when any synonym of the set is a
//! case-insensitive substring of the item. English anchors sit in the sets
//! next to the IAST forms so English themes reach the Sanskrit vocabulary.

pub const ROOT_EXPANSIONS: &[(&str, &[&str])] = &[
    ("dhṛ", &["dharma", "dhṛti", "dhāraṇa", "dhārmika"]),
    ("kṛ", &["karma", "kriyā", "kartavya", "kārya"]),
    ("śam", &["śānti", "śama", "praśānta", "peace"]),
    ("bhaj", &["bhakti", "bhajana", "bhakta", "devotion"]),
    ("jñā", &["jñāna", "prajñā", "vijñāna", "knowledge", "wisdom"]),
    ("an", &["ātman", "prāṇa", "soul"]),
    ("muc", &["mokṣa", "mukti", "vimukti", "liberation"]),
    ("duḥkh", &["duḥkha", "śoka", "suffering", "sorrow"]),
    ("dhyai", &["dhyāna", "samādhi", "meditation"]),
    ("yuj", &["yoga", "yukta", "saṃyoga"]),
    ("vid", &["veda", "vidyā", "vidvān"]),
    ("bṛh", &["brahman", "brāhmaṇa", "bṛhat"]),
    ("yaj", &["yajña", "yajna", "yajus", "sacrifice"]),
    ("gṝ", &["guru", "gurukula", "ācārya"]),
    ("ag", &["agni", "agnihotra"]),
    ("ind", &["indra", "indriya"]),
];
