// * Contextual Link Candidate Detector
// * Walks the taxonomy in priority order and collects every link whose trigger
// * appears in the content. Output may contain duplicate hrefs; the bounder removes them.

use super::link::ContextualLink;
use super::normalization::normalize_content;
use crate::taxonomy::groups_by_priority;

/// Detects candidate links in raw content
pub fn detect(content: &str, base_path: &str) -> Vec<ContextualLink> {
    detect_normalized(&normalize_content(content), base_path)
}

/// Detects candidate links in content already passed through `normalize_content`
pub fn detect_normalized(normalized: &str, base_path: &str) -> Vec<ContextualLink> {
    let mut candidates = Vec::new();
    if normalized.is_empty() {
        return candidates;
    }

    for group in groups_by_priority() {
        for entry in group.entries {
            let Some(keyword) = entry.trigger.find(normalized) else {
                continue;
            };

            tracing::trace!(group = group.name, keyword = keyword, "Taxonomy entry matched");
            candidates.extend(
                entry
                    .targets
                    .iter()
                    .map(|target| ContextualLink::resolve(target, base_path, Some(keyword))),
            );

            // * Cascades only run once their parent entry has fired
            for cascade in entry.cascades {
                if let Some(narrow) = cascade.find(normalized) {
                    tracing::trace!(group = group.name, keyword = narrow, "Cascade matched");
                    candidates.extend(
                        cascade
                            .targets
                            .iter()
                            .map(|target| ContextualLink::resolve(target, base_path, Some(narrow))),
                    );
                }
            }
        }
    }

    candidates
}
