// Suggestion augmentation prompt templates.
// The résumé and job description are appended after the instructions, never
// substituted into them.

pub const AUGMENT_PROMPT_TEMPLATE: &str = r#"You are an ATS resume coach. Generate ATS-friendly improvements for the resume below so it matches the job description.

RULES:
- Do not invent experience.
- Keep wording simple and natural.
{no_fabrication}

OUTPUT SCHEMA (return exactly this structure):
{
  "improvedSummary": "string",
  "skillsSuggestions": ["string"],
  "rewrittenExperienceBullets": ["string"],
  "projectSuggestions": ["string"],
  "keywordPlacementTips": ["string"],
  "atsWarnings": ["string"]
}"#;
