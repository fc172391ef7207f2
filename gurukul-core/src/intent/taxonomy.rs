use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The 4 question intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    KnowledgeSeeking,
    GuidanceSeeking,
    MeaningSeeking,
    GeneralInquiry,
}

impl Intent {
    /// Total number of intent types.
    pub const COUNT: usize = 4;

    /// All variants, in classification precedence order.
    pub const ALL: [Intent; 4] = [
        Self::KnowledgeSeeking,
        Self::GuidanceSeeking,
        Self::MeaningSeeking,
        Self::GeneralInquiry,
    ];

    /// Wire label, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KnowledgeSeeking => "knowledge_seeking",
            Self::GuidanceSeeking => "guidance_seeking",
            Self::MeaningSeeking => "meaning_seeking",
            Self::GeneralInquiry => "general_inquiry",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
