// Prompt fragments shared by every caller of the LLM client.
// Feature-specific prompts live next to the feature that uses them.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to any prompt that rewrites a candidate's own material.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    CRITICAL: Do not invent experience, employers, dates, metrics or credentials. \
    Only rephrase, reorder or highlight what the résumé already supports. \
    If the résumé does not support a suggestion, leave it out.";
