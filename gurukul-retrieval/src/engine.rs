//! VerseRetrievalEngine: runs one request through the whole pipeline.
//!
//! question → analyze → enhance → backend search → extract (or seed fallback)
//! → score → refine themes → filter → cluster → response

use std::time::Instant;

use chrono::Utc;
use gurukul_core::config::GurukulConfig;
use gurukul_core::constants::COLLECTOR_VERSION;
use gurukul_core::errors::{GurukulError, GurukulResult};
use gurukul_core::models::{
    ClusterPayload, CollectRequest, CollectResponse, EnhancedQuery, QuerySummary,
    ResponseMetadata,
};
use gurukul_core::traits::{AnswerSpec, BackendQuery, IRetrievalBackend};
use gurukul_observability::tracing_setup::events;
use gurukul_observability::{pipeline_span, retrieval_span, DegradationTracker};
use serde_json::Value;
use tracing::{debug, info};

use crate::analysis::SemanticAnalyzer;
use crate::clustering::cluster_verses;
use crate::expansion::{self, QUERY_SUFFIX};
use crate::extraction::{VerseExtractor, FALLBACK_STRATEGY};
use crate::ranking::{self, FilterReport, RelevanceScorer};

/// Everything one run produced, including advisory data left out of the
/// wire response.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub response: CollectResponse,
    pub filter_report: FilterReport,
    /// Extraction strategy that produced the candidates.
    pub extraction_strategy: &'static str,
}

/// The verse retrieval engine. Stateless between requests.
pub struct VerseRetrievalEngine<'a> {
    backend: &'a dyn IRetrievalBackend,
    analyzer: SemanticAnalyzer,
    extractor: VerseExtractor,
    scorer: RelevanceScorer,
    config: GurukulConfig,
}

impl<'a> VerseRetrievalEngine<'a> {
    pub fn new(backend: &'a dyn IRetrievalBackend, config: GurukulConfig) -> Self {
        Self {
            backend,
            analyzer: SemanticAnalyzer::new(),
            extractor: VerseExtractor::default(),
            scorer: RelevanceScorer::default(),
            config,
        }
    }

    /// Replace the extraction chain.
    pub fn with_extractor(mut self, extractor: VerseExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Replace the scorer.
    pub fn with_scorer(mut self, scorer: RelevanceScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn config(&self) -> &GurukulConfig {
        &self.config
    }

    /// Answer a request with ranked clusters.
    pub fn collect(&self, request: &CollectRequest) -> GurukulResult<CollectResponse> {
        self.run(request).map(|run| run.response)
    }

    /// Run the full pipeline.
    ///
    /// Only configuration and authentication failures are returned as errors;
    /// every other failure is recorded as a degradation and the run goes on.
    pub fn run(&self, request: &CollectRequest) -> GurukulResult<PipelineRun> {
        let started = Instant::now();
        let correlation_id = uuid::Uuid::new_v4().to_string();
        let (min_relevance, top_k) = self.filter_settings(request)?;
        let question = request.question.as_str();

        // Step 1: Analyze the question.
        let profile = self.analyzer.analyze(question, &request.context);
        let span = pipeline_span!(correlation_id, profile.intent);
        let _guard = span.enter();
        debug!(themes = ?profile.themes, concepts = ?profile.concepts, "analyzed question");

        // Step 2: Build the backend query.
        let enhanced = self.enhance(&profile, question);
        let query = BackendQuery {
            text: enhanced.final_query_string.clone(),
            session: request
                .session_id
                .clone()
                .or_else(|| self.config.backend.session.clone()),
            filter: enhanced.scoping_filter.clone(),
            answer_spec: AnswerSpec {
                include_citations: self.config.backend.include_citations,
                preamble: self.config.backend.preamble.clone(),
            },
        };

        // Step 3: Search. Non-fatal failures leave an empty response for
        // extraction, which then falls back to the seed set.
        let mut degradations = DegradationTracker::new();
        let raw = {
            let span = retrieval_span!(self.backend.name(), query.text.len());
            let _guard = span.enter();
            match self.backend.search(&query) {
                Ok(raw) => Some(raw),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    degradations.record("retrieval", &e.to_string(), FALLBACK_STRATEGY);
                    None
                }
            }
        };

        // Step 4: Extract candidates.
        let outcome = self
            .extractor
            .extract(raw.as_ref().unwrap_or(&Value::Null), &profile);
        if let (Some(_), Some(reason)) = (&raw, &outcome.fallback_reason) {
            degradations.record("extraction", reason, FALLBACK_STRATEGY);
        }
        let extraction_strategy = outcome.strategy;

        // Step 5: Score and refine themes.
        let (mut scored, failures) = self.scorer.score_all(
            outcome.verses,
            &profile,
            question,
            self.config.retrieval.parallel_scoring,
        );
        for failure in &failures {
            degradations.record("scoring", &failure.to_string(), "zero_score");
        }
        ranking::refine_themes(&mut scored, question);

        // Step 6: Filter and cluster.
        let (kept, filter_report) = ranking::filter_verses(scored, min_relevance, top_k);
        let clusters = cluster_verses(&kept);

        let processing_time = started.elapsed().as_millis() as u64;
        events::pipeline_completed(clusters.len(), kept.len(), processing_time);
        info!(
            strategy = extraction_strategy,
            degraded = degradations.is_degraded(),
            "collected verses"
        );

        let response = CollectResponse {
            session_id: request.session_id.clone(),
            metadata: ResponseMetadata {
                total_clusters: clusters.len(),
                total_verses: kept.len(),
                processing_time,
                correlation_id,
                query: QuerySummary {
                    original: request.question.clone(),
                    enhanced,
                },
                collection_time: Utc::now(),
                collector_version: COLLECTOR_VERSION.to_string(),
                degradations: degradations.into_events(),
            },
            clusters: clusters.iter().map(ClusterPayload::from).collect(),
        };

        Ok(PipelineRun {
            response,
            filter_report,
            extraction_strategy,
        })
    }

    /// Threshold and cap for a request: its options over the configuration.
    fn filter_settings(&self, request: &CollectRequest) -> GurukulResult<(f64, usize)> {
        let min_relevance = request
            .options
            .min_relevance
            .unwrap_or(self.config.retrieval.min_relevance);
        let top_k = request.options.top_k.unwrap_or(self.config.retrieval.top_k);
        if !(0.0..=1.0).contains(&min_relevance) {
            return Err(GurukulError::Configuration {
                reason: format!("minRelevance {min_relevance} is outside [0, 1]"),
            });
        }
        if top_k == 0 {
            return Err(GurukulError::Configuration {
                reason: "topK must be greater than 0".to_string(),
            });
        }
        Ok((min_relevance, top_k))
    }

    fn enhance(&self, profile: &gurukul_core::SemanticProfile, question: &str) -> EnhancedQuery {
        let enhanced = expansion::enhance(profile, question);
        if self.config.retrieval.query_expansion {
            return enhanced;
        }
        let trimmed = question.trim();
        EnhancedQuery {
            theme_expansions: Vec::new(),
            concept_expansions: Vec::new(),
            entity_expansions: Vec::new(),
            final_query_string: if trimmed.is_empty() {
                QUERY_SUFFIX.to_string()
            } else {
                trimmed.to_string()
            },
            ..enhanced
        }
    }
}
