//! Rule-based improvement tips derived from a score.

use crate::scoring::sections::{Section, SectionChecks};

pub const LOW_SCORE_TIP: &str = "Your score is low. Add the most important missing keywords \
    into your Skills section and 1 to 2 Experience bullets.";
pub const DECENT_SCORE_TIP: &str = "Your score is decent. Add 5 to 10 missing keywords \
    naturally across Skills and Experience to improve matching.";
pub const STRONG_SCORE_TIP: &str =
    "Your score is strong. Add missing keywords only if you truly have that experience.";
pub const LOW_KEYWORD_TIP: &str = "Keyword match is low. Mirror the job description wording \
    in your Skills and Experience (without lying).";
pub const MISSING_KEYWORDS_PREFIX: &str = "Top missing keywords to consider (only if true): ";

const LOW_TOTAL: u8 = 60;
const STRONG_TOTAL: u8 = 80;
const LOW_KEYWORD: u8 = 60;
const SECTION_TIPS_BELOW: u8 = 80;
const MAX_LISTED_KEYWORDS: usize = 10;

/// Sections that get a remediation tip when missing, in the order tips appear.
/// Summary has no tip.
const SECTION_TIP_ORDER: [Section; 6] = [
    Section::Skills,
    Section::Experience,
    Section::Education,
    Section::Projects,
    Section::Certifications,
    Section::ContactInfo,
];

fn section_tip(section: Section) -> Option<&'static str> {
    match section {
        Section::Skills => Some("Add a clear Skills section with a simple list of technologies."),
        Section::Experience => Some("Add an Experience section with impact-focused bullets."),
        Section::Education => Some("Add an Education section even if it is short."),
        Section::Projects => {
            Some("Add a Projects section with 1 to 3 projects including tech stack.")
        }
        Section::Certifications => Some(
            "If you have certifications, add a Certifications section. If not, skip it.",
        ),
        Section::ContactInfo => Some("Add your email and phone at the top of the resume."),
        Section::Summary => None,
    }
}

/// Builds the ordered suggestion list. Every applicable rule appends:
/// tier message, low-keyword tip, per-section tips (only when the section score
/// is below 80), then the first ten missing keywords.
pub fn build_suggestions(
    total: u8,
    keyword_score: u8,
    section_score: u8,
    checks: &SectionChecks,
    missing_keywords: &[String],
) -> Vec<String> {
    let mut suggestions = Vec::new();

    let tier = if total < LOW_TOTAL {
        LOW_SCORE_TIP
    } else if total < STRONG_TOTAL {
        DECENT_SCORE_TIP
    } else {
        STRONG_SCORE_TIP
    };
    suggestions.push(tier.to_string());

    if keyword_score < LOW_KEYWORD {
        suggestions.push(LOW_KEYWORD_TIP.to_string());
    }

    if section_score < SECTION_TIPS_BELOW {
        suggestions.extend(
            SECTION_TIP_ORDER
                .into_iter()
                .filter(|s| !checks.get(*s))
                .filter_map(section_tip)
                .map(String::from),
        );
    }

    if !missing_keywords.is_empty() {
        let top: Vec<&str> = missing_keywords
            .iter()
            .take(MAX_LISTED_KEYWORDS)
            .map(String::as_str)
            .collect();
        suggestions.push(format!("{MISSING_KEYWORDS_PREFIX}{}", top.join(", ")));
    }

    suggestions
}
