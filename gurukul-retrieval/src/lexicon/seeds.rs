//! Built-in seed verses returned when nothing usable comes back from the
//! backend.

use gurukul_core::{CandidateVerse, SemanticProfile};

/// A hand-authored verse with its theme tags.
#[derive(Debug, Clone, Copy)]
pub struct SeedVerse {
    pub reference: &'static str,
    pub sanskrit: &'static str,
    pub translation: &'static str,
    pub interpretation: &'static str,
    pub themes: &'static [&'static str],
}

impl SeedVerse {
    /// Whether any tag of this seed names a theme or concept of `profile`.
    pub fn overlaps(&self, profile: &SemanticProfile) -> bool {
        self.themes.iter().any(|tag| profile.mentions(tag))
    }

    pub fn to_candidate(&self) -> CandidateVerse {
        let mut verse = CandidateVerse {
            reference: self.reference.to_string(),
            sanskrit: self.sanskrit.to_string(),
            translation: self.translation.to_string(),
            interpretation: self.interpretation.to_string(),
            themes: Vec::with_capacity(self.themes.len()),
            fragment: String::new(),
        };
        for theme in self.themes {
            verse.add_theme(theme);
        }
        verse
    }
}

pub const FALLBACK_SEEDS: &[SeedVerse] = &[
    SeedVerse {
        reference: "Rig Veda 1.1.1",
        sanskrit: "agnimīḷe purohitaṃ yajñasya devam ṛtvijam hotāraṃ ratnadhātamam",
        translation: "I praise Agni, the household priest, the divine minister of the sacrifice, the invoker, the bestower of treasure.",
        interpretation: "The opening hymn honours Agni as the mediator between the human and the divine, the inner fire through which every offering is carried.",
        themes: &["agni", "yajna", "devotion"],
    },
    SeedVerse {
        reference: "Rig Veda 1.32.1",
        sanskrit: "indraṃ vidātha vīryāṇi pra vocaṃ yāni cakāra prathamāni vajrī",
        translation: "Let me now proclaim the heroic deeds of Indra, the first that the wielder of the thunderbolt performed.",
        interpretation: "Indra's victory over obstruction stands for the strength that frees the waters of life held back by inner resistance.",
        themes: &["indra", "devotion"],
    },
];
