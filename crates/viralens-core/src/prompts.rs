use crate::i18n::Lang;
use crate::types::Platform;

/// Shared instruction for both audit operations. The three front-end flows
/// reuse this template so the contract with the service lives in one place.
pub fn analysis_system(lang: Lang) -> String {
    format!(
        r#"You are a senior platform strategist who audits short-form social content for virality.

IMPORTANT: Write ALL text fields in {lang}.

Field requirements:
- "score": virality score from 0 to 100 for this content on the target platform.
- "title": a scroll-stopping title for the piece.
- "analysis": your senior take on why it will or will not travel. 250 characters maximum.
- "caption": ready-to-post caption of at least 150 words with a hook, storytelling, and a call to action.
- "hashtags": ordered list, most relevant first, with the # prefix.
- "visualData": a detailed creative visual concept a director could shoot from.
- "platformSuggestion": the platform where this content would perform best, with one sentence why.
- "ideaDuration": the ideal runtime, e.g. "45-60s".

Respond with a single JSON object matching the provided schema. No markdown, no explanation."#,
        lang = lang.display_name()
    )
}

pub fn video_user(platform: Platform) -> String {
    format!(
        "Audit the attached video for {platform}. Judge the hook, pacing, and retention potential as the platform's feed algorithm would.",
        platform = platform.as_str()
    )
}

pub fn idea_user(platform: Platform, idea: &str) -> String {
    format!(
        r#"Audit this content idea for {platform} as if it were already produced:

<{idea}>

Score it against what currently performs on {platform} and write the caption for that audience."#,
        platform = platform.as_str(),
        idea = idea.trim()
    )
}

pub fn script_system(lang: Lang) -> String {
    format!(
        r#"You are a short-form video director who turns creative concepts into shot-by-shot scripts.

IMPORTANT: Write ALL text fields in {lang}.

Each scene needs:
- "scene": sequence number starting at 1.
- "description": what the camera sees, specific enough to shoot.
- "audioSFX": music, sound effects, or voiceover notes.
- "duration": on-screen time, e.g. "3s".

Respond with a JSON array of scene objects matching the provided schema. No markdown, no explanation."#,
        lang = lang.display_name()
    )
}

pub fn script_user(visual_concept: &str) -> String {
    format!(
        r#"Break this creative concept into an ordered shot-by-shot script:

<{concept}>

Keep the total runtime inside the concept's intended duration."#,
        concept = visual_concept.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_system_names_the_language() {
        let prompt = analysis_system(Lang::Es);
        assert!(prompt.contains("Spanish"));
        assert!(prompt.contains("150 words"));
        assert!(prompt.contains("250 characters"));
    }

    #[test]
    fn idea_user_embeds_platform_and_idea() {
        let prompt = idea_user(Platform::Linkedin, "  home workout tips  ");
        assert!(prompt.contains("LinkedIn"));
        assert!(prompt.contains("<home workout tips>"));
    }

    #[test]
    fn script_user_embeds_concept() {
        let prompt = script_user("Handheld close-up, natural light.");
        assert!(prompt.contains("Handheld close-up"));
    }
}
