use serde_json::{Value, json};

/// Response schema for the audit operations, in the service's OpenAPI-style
/// schema dialect. Sent alongside the prompt so the service is held to the
/// exact shape `types::AnalysisResult` deserializes.
pub fn analysis_result_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": { "type": "STRING" },
            "title": { "type": "STRING" },
            "analysis": { "type": "STRING" },
            "caption": { "type": "STRING" },
            "hashtags": { "type": "ARRAY", "items": { "type": "STRING" } },
            "visualData": { "type": "STRING" },
            "platformSuggestion": { "type": "STRING" },
            "ideaDuration": { "type": "STRING" }
        },
        "required": [
            "score",
            "title",
            "analysis",
            "caption",
            "hashtags",
            "visualData",
            "platformSuggestion",
            "ideaDuration"
        ]
    })
}

/// Response schema for script generation: an ordered array of scenes.
pub fn scene_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "scene": { "type": "INTEGER" },
                "description": { "type": "STRING" },
                "audioSFX": { "type": "STRING" },
                "duration": { "type": "STRING" }
            },
            "required": ["scene", "description", "audioSFX", "duration"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_schema_requires_every_field() {
        let schema = analysis_result_schema();
        let required = schema["required"].as_array().unwrap();
        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(required.len(), properties.len());
    }

    #[test]
    fn scene_schema_is_an_array() {
        let schema = scene_list_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"]["properties"]["audioSFX"]["type"], "STRING");
    }
}
