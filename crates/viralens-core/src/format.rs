use crate::types::{AnalysisResult, Scene};

/// Format an audit as human-readable markdown
pub fn format_result_readable(result: &AnalysisResult) -> String {
    let mut output = String::new();

    // Title
    output.push_str(&format!("# {}\n\n", result.title));

    // Meta line
    let score = match result.score_value() {
        Some(value) => format!("{}/100", value),
        None => result.score.clone(),
    };
    output.push_str(&format!(
        "**Virality score:** {} | **Best platform:** {} | **Ideal duration:** {}\n\n",
        score, result.platform_suggestion, result.idea_duration
    ));

    // Senior take
    output.push_str("## Analysis\n\n");
    output.push_str(&result.analysis);
    output.push_str("\n\n");

    // Caption
    output.push_str("## Caption\n\n");
    output.push_str(&result.caption);
    output.push_str("\n\n");

    // Hashtags
    if !result.hashtags.is_empty() {
        output.push_str("## Hashtags\n\n");
        output.push_str(&result.hashtags.join(" "));
        output.push_str("\n\n");
    }

    // Creative concept
    output.push_str("## Visual Concept\n\n");
    output.push_str(&result.visual_data);
    output.push('\n');

    output
}

/// Format a scene script as human-readable markdown
pub fn format_script_readable(scenes: &[Scene]) -> String {
    let mut output = String::new();

    output.push_str("## Scene Script\n\n");
    for scene in scenes {
        output.push_str(&format!(
            "### Scene {} ({})\n\n",
            scene.scene, scene.duration
        ));
        output.push_str(&format!("{}\n\n", scene.description));
        output.push_str(&format!("*Audio:* {}\n\n", scene.audio_sfx));
    }

    output
}
