// * content-intel
// * Contextual internal links and content quality scores for real-estate articles and listings.

pub mod config;
pub mod engine;
pub mod errors;
pub mod ops;
pub mod refinery;
pub mod taxonomy;

pub use config::{EngineConfig, LinkConfig, QualityConfig};
pub use engine::{
    assess_content_quality, filter_by_intent, generate_contextual_links, group_by_intent,
    ContextualEngine, ContextualLink,
};
pub use errors::{IntelError, Result};
pub use refinery::{QualityAssessment, QualityAssessor, QualityReport, Suggestion};
pub use taxonomy::Intent;
