// * Contextual Content Intelligence Engine
// * Two entry points over the same content: bounded contextual links and a quality report.
// * Both are pure functions of their inputs; no state is shared between calls.

pub mod bounder;
pub mod detector;
pub mod link;
pub mod normalization;

// * Re-exports for convenient access
pub use bounder::{dedup_by_href, finalize};
pub use detector::detect;
pub use link::{filter_by_intent, group_by_intent, ContextualLink};
pub use normalization::{join_base_path, normalize_content};

use crate::config::EngineConfig;
use crate::errors::Result;
use crate::refinery::{QualityAssessment, QualityAssessor, QualityReport};
use crate::taxonomy::FALLBACK_TARGETS;

/// Engine facade holding a validated configuration
pub struct ContextualEngine {
    config: EngineConfig,
    assessor: QualityAssessor,
}

impl ContextualEngine {
    /// Creates an engine, rejecting configurations it cannot honor
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let assessor = QualityAssessor::from_validated(config.quality.clone());
        Ok(Self { config, assessor })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Bounded, deduplicated, intent-tagged links for `content` under `base_path`.
    /// Sparse or empty content is topped up from the fallback set.
    pub fn generate_links(&self, content: &str, base_path: &str) -> Vec<ContextualLink> {
        let candidates = detect(content, base_path);
        let fallback: Vec<ContextualLink> = FALLBACK_TARGETS
            .iter()
            .map(|target| ContextualLink::resolve(target, base_path, None))
            .collect();

        finalize(
            candidates,
            self.config.links.min_results,
            self.config.links.max_results,
            &fallback,
        )
    }

    /// Quality report, or None for empty or whitespace-only content
    pub fn assess_quality(
        &self,
        content: &str,
        title: &str,
        keywords: &[&str],
    ) -> Option<QualityReport> {
        self.assessor.assess(content, title, keywords)
    }

    pub fn assess_quality_detailed(
        &self,
        content: &str,
        title: &str,
        keywords: &[&str],
    ) -> Option<QualityAssessment> {
        self.assessor.assess_detailed(content, title, keywords)
    }
}

impl Default for ContextualEngine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            assessor: QualityAssessor::from_validated(config.quality.clone()),
            config,
        }
    }
}

/// Contextual links with the default configuration
pub fn generate_contextual_links(content: &str, base_path: &str) -> Vec<ContextualLink> {
    ContextualEngine::default().generate_links(content, base_path)
}

/// Quality report with the default configuration
pub fn assess_content_quality(
    content: &str,
    title: &str,
    keywords: &[&str],
) -> Option<QualityReport> {
    QualityAssessor::new().assess(content, title, keywords)
}
