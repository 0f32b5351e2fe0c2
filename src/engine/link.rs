// * Contextual link output type and intent helpers

use serde::{Deserialize, Serialize};

use super::normalization::join_base_path;
use crate::taxonomy::{Intent, LinkTarget};

/// A resolved internal cross-link. Built fresh on every call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextualLink {
    /// Trigger substring that produced the link; None for fallback links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Resolved target path; the identity key for deduplication
    pub href: String,
    pub label: String,
    pub description: String,
    pub intent: Intent,
}

impl ContextualLink {
    /// Resolves a taxonomy target under `base_path`
    pub fn resolve(target: &LinkTarget, base_path: &str, keyword: Option<&str>) -> Self {
        Self {
            keyword: keyword.map(str::to_string),
            href: join_base_path(base_path, target.path),
            label: target.label.to_string(),
            description: target.description.to_string(),
            intent: target.intent,
        }
    }

    /// True when the link came from the fallback set rather than content
    pub fn is_fallback(&self) -> bool {
        self.keyword.is_none()
    }
}

/// Links of a single intent, order preserved
pub fn filter_by_intent(links: &[ContextualLink], intent: Intent) -> Vec<&ContextualLink> {
    links.iter().filter(|link| link.intent == intent).collect()
}

/// Links grouped listing -> guide -> tool, empty groups omitted
pub fn group_by_intent(links: &[ContextualLink]) -> Vec<(Intent, Vec<&ContextualLink>)> {
    Intent::ALL
        .iter()
        .map(|intent| (*intent, filter_by_intent(links, *intent)))
        .filter(|(_, group)| !group.is_empty())
        .collect()
}
