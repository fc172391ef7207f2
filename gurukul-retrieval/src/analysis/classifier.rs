//! Intent classification by keyword-group precedence.

use gurukul_core::intent::Intent;

/// Keyword groups in precedence order. The first group with any keyword
/// present in the lowercased question decides the intent.
const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::KnowledgeSeeking, &["what", "teach"]),
    (Intent::GuidanceSeeking, &["how", "guidance"]),
    (Intent::MeaningSeeking, &["why", "meaning"]),
];

/// Classify a question. Always returns exactly one intent.
pub fn classify(question: &str) -> Intent {
    let lower = question.to_lowercase();
    INTENT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|&(intent, _)| intent)
        .unwrap_or(Intent::GeneralInquiry)
}
