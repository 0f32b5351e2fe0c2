// * Content Quality Assessor
// * Scores content on readability, SEO and engagement and folds them into an overall score.
// * Pure function of its inputs; blank content is "not applicable" rather than a zero score.

pub mod content_stats;
pub mod scoring;

// * Re-exports for convenient access
pub use content_stats::ContentStats;
pub use scoring::{clamp_score, ScoreBreakdown, ScoreFactor};

use serde::Serialize;
use std::fmt;

use crate::config::QualityConfig;
use crate::engine::normalization::normalize_content;
use crate::errors::Result;
use scoring::SEO_MEDIUM_WORDS;

/// Four-score quality report. `overall` is always derived from the sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QualityReport {
    overall: u8,
    readability: u8,
    seo: u8,
    engagement: u8,
}

impl QualityReport {
    /// Builds a report, deriving `overall` from the configured weights
    pub fn from_sub_scores(
        readability: u8,
        seo: u8,
        engagement: u8,
        config: &QualityConfig,
    ) -> Self {
        let readability = readability.min(100);
        let seo = seo.min(100);
        let engagement = engagement.min(100);
        Self {
            overall: scoring::overall(readability, seo, engagement, config),
            readability,
            seo,
            engagement,
        }
    }

    pub fn overall(&self) -> u8 {
        self.overall
    }

    pub fn readability(&self) -> u8 {
        self.readability
    }

    pub fn seo(&self) -> u8 {
        self.seo
    }

    pub fn engagement(&self) -> u8 {
        self.engagement
    }
}

/// Editorial hint derived from the weakest scoring factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    ShortenSentences,
    AddParagraphBreaks,
    AdjustTitleLength,
    AddKeywordToTitle,
    IncreaseKeywordDensity,
    ReduceKeywordDensity,
    AddSubheadings,
    ExpandContent,
    AddLists,
    AddMedia,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Suggestion::ShortenSentences => "Split long sentences into shorter ones",
            Suggestion::AddParagraphBreaks => "Break long blocks of text into paragraphs",
            Suggestion::AdjustTitleLength => "Keep the title within the recommended length",
            Suggestion::AddKeywordToTitle => "Mention a target keyword in the title",
            Suggestion::IncreaseKeywordDensity => "Use the target keywords more often in the body",
            Suggestion::ReduceKeywordDensity => "Use the target keywords less often in the body",
            Suggestion::AddSubheadings => "Add subheadings to structure the content",
            Suggestion::ExpandContent => "Expand the content with more detail",
            Suggestion::AddLists => "Present features or steps as a list",
            Suggestion::AddMedia => "Add photos or a video",
        };
        f.write_str(message)
    }
}

/// Report plus everything it was computed from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityAssessment {
    pub report: QualityReport,
    pub stats: ContentStats,
    pub readability: ScoreBreakdown,
    pub seo: ScoreBreakdown,
    pub engagement: ScoreBreakdown,
    pub suggestions: Vec<Suggestion>,
}

/// Content quality assessor
pub struct QualityAssessor {
    config: QualityConfig,
}

impl QualityAssessor {
    pub fn new() -> Self {
        Self::from_validated(QualityConfig::default())
    }

    /// Creates an assessor, rejecting weights or thresholds it cannot honor
    pub fn with_config(config: QualityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    pub(crate) fn from_validated(config: QualityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QualityConfig {
        &self.config
    }

    /// Scores `content`. Returns None for empty or whitespace-only content.
    pub fn assess(&self, content: &str, title: &str, keywords: &[&str]) -> Option<QualityReport> {
        self.assess_detailed(content, title, keywords)
            .map(|assessment| assessment.report)
    }

    /// Like `assess`, with statistics, per-factor breakdowns and suggestions
    pub fn assess_detailed(
        &self,
        content: &str,
        title: &str,
        keywords: &[&str],
    ) -> Option<QualityAssessment> {
        if content.trim().is_empty() {
            return None;
        }

        let keywords = normalize_keywords(keywords);
        let normalized_title = normalize_content(title);
        let stats = ContentStats::compute(content, &keywords);

        let readability = scoring::readability(&stats, &self.config);
        let seo = scoring::seo(&stats, &normalized_title, &keywords, &self.config);
        let engagement = scoring::engagement(&stats, &self.config);
        let report = QualityReport::from_sub_scores(
            readability.score,
            seo.score,
            engagement.score,
            &self.config,
        );

        tracing::debug!(
            words = stats.word_count,
            readability = report.readability(),
            seo = report.seo(),
            engagement = report.engagement(),
            overall = report.overall(),
            "Assessed content quality"
        );

        let suggestions = self.suggest(&stats, &normalized_title, &keywords);

        Some(QualityAssessment {
            report,
            stats,
            readability,
            seo,
            engagement,
            suggestions,
        })
    }

    fn suggest(
        &self,
        stats: &ContentStats,
        normalized_title: &str,
        keywords: &[String],
    ) -> Vec<Suggestion> {
        let config = &self.config;
        let mut suggestions = Vec::new();

        if stats.sentences_over(config.long_sentence_words) > 0 {
            suggestions.push(Suggestion::ShortenSentences);
        }
        if stats.longest_block_words() > config.long_block_words {
            suggestions.push(Suggestion::AddParagraphBreaks);
        }

        let title_chars = normalized_title.trim().chars().count();
        if !(config.title_min_chars..=config.title_max_chars).contains(&title_chars) {
            suggestions.push(Suggestion::AdjustTitleLength);
        }

        if !keywords.is_empty() {
            if !keywords.iter().any(|k| normalized_title.contains(k.as_str())) {
                suggestions.push(Suggestion::AddKeywordToTitle);
            }
            if stats.keyword_density < config.density_min_percent {
                suggestions.push(Suggestion::IncreaseKeywordDensity);
            } else if stats.keyword_density > config.density_max_percent {
                suggestions.push(Suggestion::ReduceKeywordDensity);
            }
        }

        if stats.heading_count < 2 {
            suggestions.push(Suggestion::AddSubheadings);
        }
        if stats.word_count < config.min_seo_words.max(SEO_MEDIUM_WORDS) {
            suggestions.push(Suggestion::ExpandContent);
        }
        if stats.list_item_count == 0 {
            suggestions.push(Suggestion::AddLists);
        }
        if stats.media_count == 0 {
            suggestions.push(Suggestion::AddMedia);
        }

        suggestions
    }
}

impl Default for QualityAssessor {
    fn default() -> Self {
        Self::new()
    }
}

// * Lower-cased, trimmed, non-empty, first occurrence wins
fn normalize_keywords(keywords: &[&str]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let keyword = normalize_content(keyword.trim());
        if !keyword.is_empty() && !normalized.contains(&keyword) {
            normalized.push(keyword);
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::IntelError;

    const LISTING: &str = "<h2>Karasu'da Denize Sıfır Daire</h2>\
        <p>Karasu merkezde satılık 3+1 daire. Deniz manzaralı ve güneş alıyor.</p>\
        <ul><li>Asansör</li><li>Otopark</li><li>Doğalgaz</li></ul>\
        <img src=\"salon.jpg\"><img src=\"balkon.jpg\">\
        <h3>Konum</h3><p>Plaja beş dakika yürüme mesafesinde. Market ve okul yakın.</p>";

    #[test]
    fn test_blank_content_is_not_applicable() {
        let assessor = QualityAssessor::new();
        assert!(assessor.assess("", "Başlık", &[]).is_none());
        assert!(assessor.assess("   \n\t", "Başlık", &[]).is_none());
        assert!(assessor.assess_detailed("", "Başlık", &["karasu"]).is_none());
    }

    #[test]
    fn test_report_scores_are_bounded() {
        let report = QualityAssessor::new()
            .assess(LISTING, "Karasu'da denize sıfır satılık 3+1 daire", &["karasu"])
            .unwrap();
        for score in [report.overall(), report.readability(), report.seo(), report.engagement()] {
            assert!(score <= 100);
        }
        assert!(report.engagement() > 50, "Lists, media and headings should engage");
    }

    #[test]
    fn test_overall_is_derived_from_sub_scores() {
        let config = QualityConfig::default();
        let report = QualityReport::from_sub_scores(70, 40, 90, &config);
        assert_eq!(report.overall(), scoring::overall(70, 40, 90, &config));
    }

    #[test]
    fn test_report_json_field_order() {
        let report = QualityReport::from_sub_scores(50, 50, 50, &QualityConfig::default());
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"overall":50,"readability":50,"seo":50,"engagement":50}"#
        );
    }

    #[test]
    fn test_keywords_are_normalized() {
        assert_eq!(
            normalize_keywords(&["  KARASU ", "karasu", "", "İskele"]),
            vec!["karasu".to_string(), "iskele".to_string()]
        );
    }

    #[test]
    fn test_detailed_matches_plain_report() {
        let assessor = QualityAssessor::new();
        let title = "Karasu'da denize sıfır satılık 3+1 daire";
        let report = assessor.assess(LISTING, title, &["karasu"]).unwrap();
        let detailed = assessor.assess_detailed(LISTING, title, &["karasu"]).unwrap();
        assert_eq!(detailed.report, report);
        assert_eq!(detailed.readability.score, report.readability());
        assert_eq!(detailed.seo.score, report.seo());
        assert_eq!(detailed.engagement.score, report.engagement());
    }

    #[test]
    fn test_suggestions_for_thin_unstructured_text() {
        let assessor = QualityAssessor::new();
        let detailed = assessor
            .assess_detailed("Satılık ev. Bahçeli.", "Ev", &["villa"])
            .unwrap();
        let suggestions = &detailed.suggestions;
        assert!(suggestions.contains(&Suggestion::AdjustTitleLength));
        assert!(suggestions.contains(&Suggestion::AddKeywordToTitle));
        assert!(suggestions.contains(&Suggestion::IncreaseKeywordDensity));
        assert!(suggestions.contains(&Suggestion::AddSubheadings));
        assert!(suggestions.contains(&Suggestion::ExpandContent));
        assert!(suggestions.contains(&Suggestion::AddLists));
        assert!(suggestions.contains(&Suggestion::AddMedia));
        assert!(!suggestions.contains(&Suggestion::ShortenSentences));
    }

    #[test]
    fn test_suggestion_display_and_serde() {
        assert_eq!(
            Suggestion::AddMedia.to_string(),
            "Add photos or a video"
        );
        assert_eq!(
            serde_json::to_string(&Suggestion::ReduceKeywordDensity).unwrap(),
            "\"reduce_keyword_density\""
        );
    }

    #[test]
    fn test_custom_weights_change_overall() {
        let content = "Kısa bir metin. Liste yok.";
        let default_report = QualityAssessor::new().assess(content, "", &[]).unwrap();
        let seo_heavy = QualityAssessor::with_config(QualityConfig {
            readability_weight: 0.1,
            seo_weight: 10.0,
            engagement_weight: 0.1,
            ..Default::default()
        })
        .unwrap()
        .assess(content, "", &[])
        .unwrap();
        assert_eq!(default_report.seo(), seo_heavy.seo());
        assert!(seo_heavy.overall().abs_diff(seo_heavy.seo()) <= 2);
    }

    #[test]
    fn test_with_config_rejects_invalid_weights() {
        let result = QualityAssessor::with_config(QualityConfig {
            readability_weight: -1.0,
            ..Default::default()
        });
        assert!(matches!(result, Err(IntelError::InvalidConfig(_))));
    }

    #[test]
    fn test_wall_of_text_after_short_paragraph_is_penalized() {
        let assessor = QualityAssessor::new();
        let wall = "kelime ".repeat(400);
        let bare = assessor.assess_detailed(&wall, "", &[]).unwrap();
        let wrapped_intro = format!("<p>Kısa giriş.</p>{}", wall);
        let wrapped = assessor.assess_detailed(&wrapped_intro, "", &[]).unwrap();
        assert_eq!(bare.readability.points("long_blocks"), -25.0);
        assert_eq!(wrapped.readability.points("long_blocks"), -25.0);
        assert!(wrapped.suggestions.contains(&Suggestion::AddParagraphBreaks));
    }
}
