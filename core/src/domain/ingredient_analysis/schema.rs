use serde_json::json;

/// Returns the JSON schema for ingredient analysis LLM responses
pub fn get_ingredient_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "inferred_intent": { "type": "string" },
            "what_stands_out": { "type": "string" },
            "why_it_matters": { "type": "string" },
            "uncertainty": { "type": "string" },
            "recommendation": { "type": "string" }
        },
        "required": [
            "inferred_intent", "what_stands_out", "why_it_matters",
            "uncertainty", "recommendation"
        ]
    })
}
