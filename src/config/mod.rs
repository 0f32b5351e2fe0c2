// * Engine Configuration
// * Link bounds and quality thresholds, loadable from partial JSON documents

pub mod constants;

use serde::{Deserialize, Serialize};

use crate::errors::{IntelError, Result};
use constants::*;

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub links: LinkConfig,
    #[serde(default)]
    pub quality: QualityConfig,
}

/// Bounds applied when finalizing contextual links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Fallback links top the list up to this count
    pub min_results: usize,
    /// The list is truncated to this count after fallback augmentation
    pub max_results: usize,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            min_results: DEFAULT_MIN_RESULTS,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Thresholds and weights for the quality assessor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    pub readability_weight: f64,
    pub seo_weight: f64,
    pub engagement_weight: f64,
    pub short_sentence_words: usize,
    pub long_sentence_words: usize,
    pub long_block_words: usize,
    pub very_long_block_words: usize,
    pub title_min_chars: usize,
    pub title_max_chars: usize,
    pub density_min_percent: f64,
    pub density_max_percent: f64,
    pub density_stuffing_percent: f64,
    pub min_seo_words: usize,
    pub thin_content_seo_cap: f64,
    pub engagement_word_ceiling: usize,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            readability_weight: READABILITY_WEIGHT,
            seo_weight: SEO_WEIGHT,
            engagement_weight: ENGAGEMENT_WEIGHT,
            short_sentence_words: SHORT_SENTENCE_WORDS,
            long_sentence_words: LONG_SENTENCE_WORDS,
            long_block_words: LONG_BLOCK_WORDS,
            very_long_block_words: VERY_LONG_BLOCK_WORDS,
            title_min_chars: TITLE_MIN_CHARS,
            title_max_chars: TITLE_MAX_CHARS,
            density_min_percent: DENSITY_MIN_PERCENT,
            density_max_percent: DENSITY_MAX_PERCENT,
            density_stuffing_percent: DENSITY_STUFFING_PERCENT,
            min_seo_words: MIN_SEO_WORDS,
            thin_content_seo_cap: THIN_CONTENT_SEO_CAP,
            engagement_word_ceiling: ENGAGEMENT_WORD_CEILING,
        }
    }
}

impl EngineConfig {
    /// Parses a (possibly partial) JSON document and validates the result
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the engine cannot honor
    pub fn validate(&self) -> Result<()> {
        self.links.validate()?;
        self.quality.validate()
    }
}

impl LinkConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(IntelError::InvalidConfig(
                "links.max_results must be at least 1".into(),
            ));
        }
        if self.min_results > self.max_results {
            return Err(IntelError::InvalidConfig(format!(
                "links.min_results ({}) exceeds links.max_results ({})",
                self.min_results, self.max_results
            )));
        }
        Ok(())
    }
}

impl QualityConfig {
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("readability_weight", self.readability_weight),
            ("seo_weight", self.seo_weight),
            ("engagement_weight", self.engagement_weight),
        ];
        for (name, weight) in weights {
            // ! Zero weights would let a sub-score change without moving the overall score
            if !weight.is_finite() || weight <= 0.0 {
                return Err(IntelError::InvalidConfig(format!(
                    "quality.{} must be a positive number, got {}",
                    name, weight
                )));
            }
        }

        if self.short_sentence_words > self.long_sentence_words {
            return Err(IntelError::InvalidConfig(
                "quality.short_sentence_words exceeds quality.long_sentence_words".into(),
            ));
        }
        if self.long_block_words > self.very_long_block_words {
            return Err(IntelError::InvalidConfig(
                "quality.long_block_words exceeds quality.very_long_block_words".into(),
            ));
        }
        if self.title_min_chars > self.title_max_chars {
            return Err(IntelError::InvalidConfig(
                "quality.title_min_chars exceeds quality.title_max_chars".into(),
            ));
        }

        let densities = [
            self.density_min_percent,
            self.density_max_percent,
            self.density_stuffing_percent,
        ];
        if densities.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return Err(IntelError::InvalidConfig(
                "quality density thresholds must be finite and non-negative".into(),
            ));
        }
        if self.density_min_percent > self.density_max_percent
            || self.density_max_percent > self.density_stuffing_percent
        {
            return Err(IntelError::InvalidConfig(
                "quality density thresholds must satisfy min <= max <= stuffing".into(),
            ));
        }

        if !self.thin_content_seo_cap.is_finite() {
            return Err(IntelError::InvalidConfig(
                "quality.thin_content_seo_cap must be finite".into(),
            ));
        }
        if self.engagement_word_ceiling == 0 {
            return Err(IntelError::InvalidConfig(
                "quality.engagement_word_ceiling must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.links.min_results, 3);
        assert_eq!(config.links.max_results, 6);
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let config = EngineConfig::from_json(r#"{"links": {"max_results": 4}}"#).unwrap();
        assert_eq!(config.links.max_results, 4);
        assert_eq!(config.links.min_results, DEFAULT_MIN_RESULTS);
        assert_eq!(config.quality, QualityConfig::default());
    }

    #[test]
    fn test_empty_json_object_yields_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_min_above_max_rejected() {
        let result = EngineConfig::from_json(r#"{"links": {"min_results": 8, "max_results": 6}}"#);
        assert!(matches!(result, Err(IntelError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_max_rejected() {
        let config = LinkConfig {
            min_results: 0,
            max_results: 0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        let config = QualityConfig {
            seo_weight: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = QualityConfig {
            engagement_weight: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_density_band_rejected() {
        let config = QualityConfig {
            density_min_percent: 3.0,
            density_max_percent: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let result = EngineConfig::from_json("{not json");
        assert!(matches!(result, Err(IntelError::Json(_))));
    }
}
