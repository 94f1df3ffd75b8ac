//! Answer post-processing

/// Maximum character budget for a final answer
pub const MAX_ANSWER_CHARS: usize = 1000;

const ANSWER_MARKER: &str = "Answer:";
const ELLIPSIS: &str = "...";

/// Clean raw generated text into a final answer:
/// keep only what follows the last "Answer:" marker, strip a verbatim
/// prompt echo, and truncate to the character budget with an ellipsis.
pub fn clean_answer(raw: &str, prompt: &str) -> String {
    let mut text = raw.trim().to_string();

    if let Some(pos) = text.rfind(ANSWER_MARKER) {
        text = text[pos + ANSWER_MARKER.len()..].trim().to_string();
    }

    // Some models echo their input
    if text.contains(prompt) {
        text = text.replace(prompt, "").trim().to_string();
    }

    if text.chars().count() > MAX_ANSWER_CHARS {
        text = text.chars().take(MAX_ANSWER_CHARS).collect::<String>() + ELLIPSIS;
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_text_after_last_answer_marker() {
        let raw = "Answer: draft one\nAnswer: the real answer";
        assert_eq!(clean_answer(raw, "prompt"), "the real answer");
    }

    #[test]
    fn test_strips_prompt_echo() {
        let prompt = "Context:\nstuff\n\nQuestion: q\nAnswer:";
        let raw = format!("some preamble {} the answer", prompt);
        let cleaned = clean_answer(&raw, prompt);
        assert!(!cleaned.contains("Context:"));
        assert!(cleaned.contains("the answer"));
    }

    #[test]
    fn test_truncates_to_budget_with_ellipsis() {
        let raw = "x".repeat(1500);
        let cleaned = clean_answer(&raw, "prompt");
        assert_eq!(cleaned.chars().count(), MAX_ANSWER_CHARS + 3);
        assert!(cleaned.ends_with("..."));
        assert_eq!(&cleaned[..MAX_ANSWER_CHARS], "x".repeat(1000));
    }

    #[test]
    fn test_short_answers_pass_through() {
        assert_eq!(clean_answer("  plain answer  ", "prompt"), "plain answer");
    }
}
