// * Quality Sub-Scores
// * Readability, SEO and engagement scores on a 0-100 scale with a per-factor breakdown.
// * Every factor is monotonic in its stated direction so edits move scores predictably.

use serde::Serialize;

use super::content_stats::ContentStats;
use crate::config::constants::{SCORE_MAX, SCORE_MIN};
use crate::config::QualityConfig;

// * Readability points
const READABILITY_BASE: f64 = 40.0;
const AVG_SENTENCE_IDEAL_WORDS: f64 = 15.0;
const AVG_SENTENCE_GOOD_WORDS: f64 = 20.0;
const SCORE_AVG_IDEAL: f64 = 30.0;
const SCORE_AVG_GOOD: f64 = 20.0;
const SCORE_AVG_ACCEPTABLE: f64 = 10.0;
const SCORE_SHORT_SENTENCE_RATIO: f64 = 15.0;
const SCORE_LONG_SENTENCE_RATIO: f64 = -20.0;
const SCORE_MANY_PARAGRAPHS: f64 = 15.0;
const SCORE_TWO_PARAGRAPHS: f64 = 8.0;
const SCORE_LONG_BLOCK: f64 = -15.0;
const SCORE_VERY_LONG_BLOCK: f64 = -25.0;

// * SEO points
const SCORE_TITLE_IN_RANGE: f64 = 20.0;
const SCORE_TITLE_NEAR_RANGE: f64 = 10.0;
const TITLE_NEAR_RANGE_OVERSHOOT: usize = 10;
const SCORE_KEYWORD_IN_TITLE: f64 = 20.0;
const SCORE_DENSITY_IN_BAND: f64 = 20.0;
const SCORE_DENSITY_LOW: f64 = 10.0;
const SCORE_DENSITY_HIGH: f64 = 5.0;
const SCORE_KEYWORDS_NEUTRAL: f64 = 10.0;
const SCORE_MANY_SUBHEADINGS: f64 = 15.0;
const SCORE_ONE_SUBHEADING: f64 = 8.0;
pub const SEO_LONG_WORDS: usize = 300;
pub const SEO_MEDIUM_WORDS: usize = 150;
const SCORE_LONG_CONTENT: f64 = 25.0;
const SCORE_MEDIUM_CONTENT: f64 = 15.0;
const SCORE_SHORT_CONTENT: f64 = 5.0;

// * Engagement points
const SCORE_MANY_LIST_ITEMS: f64 = 20.0;
const SCORE_SOME_LIST_ITEMS: f64 = 10.0;
const SCORE_MANY_MEDIA: f64 = 20.0;
const SCORE_ONE_MEDIA: f64 = 12.0;
const SCORE_PER_STRUCTURE_KIND: f64 = 10.0;
const SCORE_LENGTH_CEILING: f64 = 30.0;

/// A single contribution to a sub-score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreFactor {
    pub name: &'static str,
    pub points: f64,
}

/// Breakdown of one sub-score for editorial display and debugging
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ScoreBreakdown {
    pub factors: Vec<ScoreFactor>,
    /// Sum of all factor points before capping and clamping
    pub raw: f64,
    /// Cap applied to the raw sum, if any
    pub cap: Option<f64>,
    pub score: u8,
}

impl ScoreBreakdown {
    fn add(&mut self, name: &'static str, points: f64) {
        if points != 0.0 {
            self.factors.push(ScoreFactor { name, points });
        }
        self.raw += points;
    }

    fn finish(mut self) -> Self {
        let capped = match self.cap {
            Some(cap) => self.raw.min(cap),
            None => self.raw,
        };
        self.score = clamp_score(capped);
        self
    }

    /// Points contributed by the named factor (0.0 when absent)
    pub fn points(&self, name: &str) -> f64 {
        self.factors
            .iter()
            .filter(|factor| factor.name == name)
            .map(|factor| factor.points)
            .sum()
    }
}

/// Clamps to [0, 100] and rounds to an integer score. Non-finite input scores 0.
pub fn clamp_score(raw: f64) -> u8 {
    if !raw.is_finite() {
        return SCORE_MIN as u8;
    }
    raw.clamp(SCORE_MIN, SCORE_MAX).round() as u8
}

/// Shorter sentences and paragraph breaks raise the score.
/// Long sentences and walls of text lower it.
pub fn readability(stats: &ContentStats, config: &QualityConfig) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();
    breakdown.add("base", READABILITY_BASE);

    let sentences = stats.sentence_count();
    if sentences > 0 {
        let avg = stats.avg_sentence_words();
        let avg_points = if avg <= AVG_SENTENCE_IDEAL_WORDS {
            SCORE_AVG_IDEAL
        } else if avg <= AVG_SENTENCE_GOOD_WORDS {
            SCORE_AVG_GOOD
        } else if avg <= config.long_sentence_words as f64 {
            SCORE_AVG_ACCEPTABLE
        } else {
            0.0
        };
        breakdown.add("average_sentence_length", avg_points);

        let short_ratio =
            stats.sentences_at_most(config.short_sentence_words) as f64 / sentences as f64;
        breakdown.add("short_sentences", short_ratio * SCORE_SHORT_SENTENCE_RATIO);

        let long_ratio = stats.sentences_over(config.long_sentence_words) as f64 / sentences as f64;
        breakdown.add("long_sentences", long_ratio * SCORE_LONG_SENTENCE_RATIO);
    }

    let paragraph_points = match stats.paragraph_count() {
        0 | 1 => 0.0,
        2 => SCORE_TWO_PARAGRAPHS,
        _ => SCORE_MANY_PARAGRAPHS,
    };
    breakdown.add("paragraph_breaks", paragraph_points);

    let longest = stats.longest_block_words();
    let block_points = if longest > config.very_long_block_words {
        SCORE_VERY_LONG_BLOCK
    } else if longest > config.long_block_words {
        SCORE_LONG_BLOCK
    } else {
        0.0
    };
    breakdown.add("long_blocks", block_points);

    breakdown.finish()
}

/// Title fit, keyword placement and density, subheadings and length, capped for thin content.
/// `keywords` and `normalized_title` must already be normalized.
pub fn seo(
    stats: &ContentStats,
    normalized_title: &str,
    keywords: &[String],
    config: &QualityConfig,
) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    let title_chars = normalized_title.trim().chars().count();
    let near_min = config.title_min_chars / 2;
    let near_max = config.title_max_chars + TITLE_NEAR_RANGE_OVERSHOOT;
    let title_points = if (config.title_min_chars..=config.title_max_chars).contains(&title_chars) {
        SCORE_TITLE_IN_RANGE
    } else if (near_min..=near_max).contains(&title_chars) && title_chars > 0 {
        SCORE_TITLE_NEAR_RANGE
    } else {
        0.0
    };
    breakdown.add("title_length", title_points);

    if keywords.is_empty() {
        // * Nothing to check keyword placement against
        breakdown.add("keyword_in_title", SCORE_KEYWORDS_NEUTRAL);
        breakdown.add("keyword_density", SCORE_KEYWORDS_NEUTRAL);
    } else {
        if keywords.iter().any(|k| normalized_title.contains(k.as_str())) {
            breakdown.add("keyword_in_title", SCORE_KEYWORD_IN_TITLE);
        }

        let density = stats.keyword_density;
        let density_points = if density <= 0.0 {
            0.0
        } else if density < config.density_min_percent {
            SCORE_DENSITY_LOW
        } else if density <= config.density_max_percent {
            SCORE_DENSITY_IN_BAND
        } else if density <= config.density_stuffing_percent {
            SCORE_DENSITY_HIGH
        } else {
            0.0
        };
        breakdown.add("keyword_density", density_points);
    }

    let heading_points = match stats.heading_count {
        0 => 0.0,
        1 => SCORE_ONE_SUBHEADING,
        _ => SCORE_MANY_SUBHEADINGS,
    };
    breakdown.add("subheadings", heading_points);

    let length_points = if stats.word_count >= SEO_LONG_WORDS {
        SCORE_LONG_CONTENT
    } else if stats.word_count >= SEO_MEDIUM_WORDS {
        SCORE_MEDIUM_CONTENT
    } else {
        SCORE_SHORT_CONTENT
    };
    breakdown.add("content_length", length_points);

    // ! Thin content stays low no matter how well the other factors score
    if stats.word_count < config.min_seo_words {
        breakdown.cap = Some(config.thin_content_seo_cap);
    }

    breakdown.finish()
}

/// Lists, media and structural variety, plus a length bonus that saturates
pub fn engagement(stats: &ContentStats, config: &QualityConfig) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    let list_points = match stats.list_item_count {
        0 => 0.0,
        1 | 2 => SCORE_SOME_LIST_ITEMS,
        _ => SCORE_MANY_LIST_ITEMS,
    };
    breakdown.add("lists", list_points);

    let media_points = match stats.media_count {
        0 => 0.0,
        1 => SCORE_ONE_MEDIA,
        _ => SCORE_MANY_MEDIA,
    };
    breakdown.add("media", media_points);

    breakdown.add(
        "structural_variety",
        stats.structural_variety() as f64 * SCORE_PER_STRUCTURE_KIND,
    );

    let ceiling = config.engagement_word_ceiling.max(1);
    let length_ratio = stats.word_count.min(ceiling) as f64 / ceiling as f64;
    breakdown.add("length", length_ratio * SCORE_LENGTH_CEILING);

    breakdown.finish()
}

/// Weighted average of the sub-scores, normalized by the weight sum
pub fn overall(readability: u8, seo: u8, engagement: u8, config: &QualityConfig) -> u8 {
    let weight_sum = config.readability_weight + config.seo_weight + config.engagement_weight;
    if !weight_sum.is_finite() || weight_sum <= 0.0 {
        return clamp_score((readability as f64 + seo as f64 + engagement as f64) / 3.0);
    }
    let weighted = config.readability_weight * readability as f64
        + config.seo_weight * seo as f64
        + config.engagement_weight * engagement as f64;
    clamp_score(weighted / weight_sum)
}
