// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; this file holds only cross-cutting pieces.

/// Appended to every prompt whose answer is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";
