// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; cross-cutting fragments live here.

/// Appended to every prompt that expects structured output.
pub const JSON_ONLY_INSTRUCTION: &str = "Your response must be ONLY a single, valid JSON object. \
    Do not add any markdown formatting. \
    Do not include explanations or text outside the JSON object.";
