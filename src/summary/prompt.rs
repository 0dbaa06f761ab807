/// Wrap a meeting transcript into the instructions sent to the language model.
pub fn build_prompt(transcript: &str) -> String {
    format!(
        "Summarize this meeting transcript. Return:
1. A brief summary
2. Key action points
3. Decisions made

Transcript:
{transcript}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_prompt() {
        let prompt = build_prompt("Alice: we ship on Monday.\nBob: agreed.");

        assert_eq!(
            "Summarize this meeting transcript. Return:\n1. A brief summary\n2. Key action points\n3. Decisions made\n\nTranscript:\nAlice: we ship on Monday.\nBob: agreed.",
            prompt
        );
    }

    #[test]
    fn should_build_prompt_from_empty_transcript() {
        let prompt = build_prompt("");

        assert!(prompt.ends_with("Transcript:\n"));
    }
}
