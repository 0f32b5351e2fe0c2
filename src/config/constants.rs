// * Configuration Constants
// * Central location for all link bounds, quality thresholds and weights

// * Minimum number of contextual links before fallback links are appended
pub const DEFAULT_MIN_RESULTS: usize = 3;

// * Hard upper bound on returned contextual links
pub const DEFAULT_MAX_RESULTS: usize = 6;

// * Overall score weights (readability, seo, engagement)
pub const READABILITY_WEIGHT: f64 = 0.35;
pub const SEO_WEIGHT: f64 = 0.35;
pub const ENGAGEMENT_WEIGHT: f64 = 0.30;

// * Sentence length thresholds in words
pub const SHORT_SENTENCE_WORDS: usize = 12;
pub const LONG_SENTENCE_WORDS: usize = 25;

// * A paragraph block longer than this reads as an unbroken wall of text
pub const LONG_BLOCK_WORDS: usize = 150;
pub const VERY_LONG_BLOCK_WORDS: usize = 300;

// * Title length target range in characters
pub const TITLE_MIN_CHARS: usize = 30;
pub const TITLE_MAX_CHARS: usize = 60;

// * Keyword density target band in percent of body words
pub const DENSITY_MIN_PERCENT: f64 = 0.5;
pub const DENSITY_MAX_PERCENT: f64 = 2.5;

// * Above this density the body is treated as keyword stuffing
pub const DENSITY_STUFFING_PERCENT: f64 = 4.0;

// * Below this word count the SEO score is capped
pub const MIN_SEO_WORDS: usize = 100;
pub const THIN_CONTENT_SEO_CAP: f64 = 40.0;

// * Engagement length bonus saturates at this word count
pub const ENGAGEMENT_WORD_CEILING: usize = 600;

// * Score bounds
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;
