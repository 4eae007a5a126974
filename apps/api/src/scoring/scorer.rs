//! ATS scorer: keyword match ratio blended with section presence.
//!
//! Algorithm:
//! 1. Extract keywords from the job description (bigrams, then unigrams).
//! 2. A keyword matches when the normalized résumé contains it as a substring.
//!    No word-boundary check, so "java" matches inside "javascript".
//! 3. keyword_score = round(100 × matched / extracted), 0 with no keywords.
//! 4. section_score = round(100 × present / 7) from the `SectionDetector`.
//! 5. total_score = round(0.70 × keyword_score + 0.30 × section_score).

use serde::{Deserialize, Serialize};

use crate::scoring::keywords::extract_keywords;
use crate::scoring::normalizer::normalize;
use crate::scoring::sections::{HeadingSectionDetector, Section, SectionChecks, SectionDetector};
use crate::scoring::suggestions::build_suggestions;

const KEYWORD_WEIGHT: f64 = 0.70;
const SECTION_WEIGHT: f64 = 0.30;

/// Outcome of scoring one résumé against one job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total_score: u8,         // 0 – 100
    pub keyword_score: u8,       // 0 – 100
    pub section_score: u8,       // 0 – 100
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub section_checks: SectionChecks,
    pub suggestions: Vec<String>,
}

/// Pure, stateless scorer. Safe to share across requests.
pub struct AtsScorer {
    detector: Box<dyn SectionDetector>,
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::with_detector(Box::new(HeadingSectionDetector))
    }
}

impl AtsScorer {
    pub fn with_detector(detector: Box<dyn SectionDetector>) -> Self {
        Self { detector }
    }

    /// Scores `resume_raw` (unnormalized extracted text) against `job_description`.
    /// Total over all inputs.
    pub fn score(&self, resume_raw: &str, job_description: &str) -> ScoreResult {
        let resume_norm = normalize(resume_raw);
        let keywords = extract_keywords(job_description);

        let mut matched = Vec::new();
        let mut missing = Vec::new();
        for keyword in &keywords {
            let keyword_norm = normalize(keyword);
            if keyword_norm.is_empty() {
                continue;
            }
            if resume_norm.contains(&keyword_norm) {
                matched.push(keyword.clone());
            } else {
                missing.push(keyword.clone());
            }
        }

        let keyword_score = ratio_score(matched.len(), keywords.len());

        let section_checks = self.detector.detect(resume_raw);
        let section_score = ratio_score(section_checks.passed_count(), Section::ALL.len());

        let total_score = composite_score(keyword_score, section_score);

        let suggestions = build_suggestions(
            total_score,
            keyword_score,
            section_score,
            &section_checks,
            &missing,
        );

        ScoreResult {
            total_score,
            keyword_score,
            section_score,
            matched_keywords: matched,
            missing_keywords: missing,
            section_checks,
            suggestions,
        }
    }
}

/// round(100 × part / whole), 0 when `whole` is 0.
pub fn ratio_score(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    round_half_up(part as f64 / whole as f64 * 100.0)
}

/// 70/30 blend of keyword and section scores.
pub fn composite_score(keyword_score: u8, section_score: u8) -> u8 {
    round_half_up(keyword_score as f64 * KEYWORD_WEIGHT + section_score as f64 * SECTION_WEIGHT)
}

fn round_half_up(value: f64) -> u8 {
    (value + 0.5).floor().clamp(0.0, 100.0) as u8
}
