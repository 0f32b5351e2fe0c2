// * Keyword Taxonomy
// * Static keyword-to-link table driving contextual link detection.
// * Groups carry an explicit priority; detection walks them in ascending order.

mod groups;

pub use groups::{FALLBACK_TARGETS, TAXONOMY};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Purpose of a link, used by callers for UI grouping and sidebar filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Property search results
    Listing,
    /// Educational article
    Guide,
    /// Interactive calculator or widget
    Tool,
}

impl Intent {
    /// All intents in display order
    pub const ALL: [Intent; 3] = [Intent::Listing, Intent::Guide, Intent::Tool];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Listing => "listing",
            Intent::Guide => "guide",
            Intent::Tool => "tool",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base-path independent link target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkTarget {
    /// Path below the locale base path, always starting with '/'
    pub path: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub intent: Intent,
}

/// Condition under which a taxonomy entry fires
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Any one of the keywords is present
    AnyOf(&'static [&'static str]),
    /// One keyword from each set is present (e.g. a transactional verb and a property noun)
    AllOf {
        primary: &'static [&'static str],
        secondary: &'static [&'static str],
    },
}

impl Trigger {
    /// Returns the keyword credited for the match, or None when the trigger does not fire.
    /// `normalized` must already be lower-cased.
    pub fn find(&self, normalized: &str) -> Option<&'static str> {
        match self {
            Trigger::AnyOf(keywords) => first_present(keywords, normalized),
            Trigger::AllOf { primary, secondary } => {
                let hit = first_present(primary, normalized)?;
                first_present(secondary, normalized).map(|_| hit)
            }
        }
    }

    /// Every keyword this trigger inspects
    pub fn keywords(&self) -> Vec<&'static str> {
        match self {
            Trigger::AnyOf(keywords) => keywords.to_vec(),
            Trigger::AllOf { primary, secondary } => {
                primary.iter().chain(secondary.iter()).copied().collect()
            }
        }
    }
}

/// Narrower links appended only when a further keyword is also present
#[derive(Debug, Clone, Copy)]
pub struct Cascade {
    pub keywords: &'static [&'static str],
    pub targets: &'static [LinkTarget],
}

impl Cascade {
    /// Returns the first cascade keyword present in `normalized`
    pub fn find(&self, normalized: &str) -> Option<&'static str> {
        first_present(self.keywords, normalized)
    }
}

/// One trigger with the links it unlocks
#[derive(Debug, Clone, Copy)]
pub struct TaxonomyEntry {
    pub trigger: Trigger,
    pub targets: &'static [LinkTarget],
    /// Evaluated only when `trigger` fires
    pub cascades: &'static [Cascade],
}

impl TaxonomyEntry {
    /// Every keyword the entry and its cascades inspect
    pub fn keywords(&self) -> Vec<&'static str> {
        let mut keywords = self.trigger.keywords();
        for cascade in self.cascades {
            keywords.extend_from_slice(cascade.keywords);
        }
        keywords
    }
}

/// A named group of entries with an explicit detection priority (lower runs first)
#[derive(Debug, Clone, Copy)]
pub struct TaxonomyGroup {
    pub name: &'static str,
    pub priority: u8,
    pub entries: &'static [TaxonomyEntry],
}

// * Groups sorted once by priority; the sort is stable so equal priorities keep table order
static GROUPS_BY_PRIORITY: LazyLock<Vec<&'static TaxonomyGroup>> = LazyLock::new(|| {
    let mut groups: Vec<&'static TaxonomyGroup> = TAXONOMY.iter().collect();
    groups.sort_by_key(|group| group.priority);
    groups
});

/// Taxonomy groups in detection order
pub fn groups_by_priority() -> &'static [&'static TaxonomyGroup] {
    &GROUPS_BY_PRIORITY
}

/// Substring test that never matches an empty keyword
pub fn contains_keyword(normalized: &str, keyword: &str) -> bool {
    !keyword.is_empty() && normalized.contains(keyword)
}

fn first_present(keywords: &[&'static str], normalized: &str) -> Option<&'static str> {
    keywords
        .iter()
        .copied()
        .find(|keyword| contains_keyword(normalized, keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_groups_sorted_by_priority() {
        let priorities: Vec<u8> = groups_by_priority().iter().map(|g| g.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        assert_eq!(priorities, sorted);
        assert_eq!(priorities.len(), TAXONOMY.len());
    }

    #[test]
    fn test_group_order_matches_documented_sequence() {
        let names: Vec<&str> = groups_by_priority().iter().map(|g| g.name).collect();
        assert_eq!(
            names,
            vec!["region", "thematic", "transactional", "domain", "seasonal"]
        );
    }

    #[test]
    fn test_all_keywords_non_empty_and_lowercase() {
        for group in TAXONOMY {
            for entry in group.entries {
                for keyword in entry.keywords() {
                    assert!(!keyword.is_empty(), "Empty keyword in group {}", group.name);
                    assert_eq!(
                        keyword,
                        keyword.to_lowercase(),
                        "Keyword '{}' in group {} is not lower-case",
                        keyword,
                        group.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_all_paths_are_rooted() {
        let targets = TAXONOMY
            .iter()
            .flat_map(|g| g.entries.iter())
            .flat_map(|e| {
                e.targets
                    .iter()
                    .chain(e.cascades.iter().flat_map(|c| c.targets.iter()))
            })
            .chain(FALLBACK_TARGETS.iter());

        for target in targets {
            assert!(target.path.starts_with('/'), "Path not rooted: {}", target.path);
            assert!(!target.label.is_empty());
            assert!(!target.description.is_empty());
        }
    }

    #[test]
    fn test_fallback_targets_unique() {
        let paths: HashSet<&str> = FALLBACK_TARGETS.iter().map(|t| t.path).collect();
        assert_eq!(paths.len(), FALLBACK_TARGETS.len());
        assert!(FALLBACK_TARGETS.len() >= crate::config::constants::DEFAULT_MIN_RESULTS);
    }

    #[test]
    fn test_any_of_trigger() {
        let trigger = Trigger::AnyOf(&["tapu", "deed"]);
        assert_eq!(trigger.find("title deed transfer"), Some("deed"));
        assert_eq!(trigger.find("tapu ve deed"), Some("tapu"));
        assert_eq!(trigger.find("nothing here"), None);
    }

    #[test]
    fn test_all_of_trigger_requires_both_sets() {
        let trigger = Trigger::AllOf {
            primary: &["buy"],
            secondary: &["house"],
        };
        assert_eq!(trigger.find("a house by the sea"), None);
        assert_eq!(trigger.find("buy now"), None);
        assert_eq!(trigger.find("buy a house"), Some("buy"));
    }

    #[test]
    fn test_empty_keyword_never_matches() {
        assert!(!contains_keyword("anything", ""));
        let trigger = Trigger::AnyOf(&[""]);
        assert_eq!(trigger.find("anything"), None);
    }

    #[test]
    fn test_intent_serialization() {
        assert_eq!(serde_json::to_string(&Intent::Listing).unwrap(), "\"listing\"");
        assert_eq!(serde_json::to_string(&Intent::Tool).unwrap(), "\"tool\"");
        let parsed: Intent = serde_json::from_str("\"guide\"").unwrap();
        assert_eq!(parsed, Intent::Guide);
        assert!(serde_json::from_str::<Intent>("\"blog\"").is_err());
        assert_eq!(Intent::Guide.to_string(), "guide");
    }
}
