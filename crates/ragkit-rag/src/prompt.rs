//! Prompt and context construction

use ragkit_core::ScoredDocument;

/// Placeholder used when retrieval returns nothing, so the generation
/// prompt always has a well-formed context section.
pub const NO_CONTEXT: &str = "No context.";

/// Concatenate retrieved document texts, newline-separated, in the
/// order returned by the store (already similarity-ranked).
pub fn build_context(docs: &[ScoredDocument]) -> String {
    if docs.is_empty() {
        return NO_CONTEXT.to_string();
    }

    docs.iter()
        .map(|d| d.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// The fixed prompt template: answer from context, best-effort when the
/// answer is absent, context and question embedded verbatim.
pub fn build_prompt(context: &str, question: &str) -> String {
    format!(
        "Answer the following question using the provided context. \
         If the answer is not in the context, give your best explanation.\n\n\
         Context:\n{}\n\nQuestion: {}\nAnswer:",
        context, question
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(id: &str, text: &str) -> ScoredDocument {
        ScoredDocument {
            id: id.to_string(),
            text: text.to_string(),
            score: 0.5,
        }
    }

    #[test]
    fn test_empty_retrieval_gives_placeholder() {
        assert_eq!(build_context(&[]), NO_CONTEXT);
    }

    #[test]
    fn test_context_preserves_store_order() {
        let docs = vec![scored("a", "first doc"), scored("b", "second doc")];
        assert_eq!(build_context(&docs), "first doc\nsecond doc");
    }

    #[test]
    fn test_prompt_embeds_context_and_question_verbatim() {
        let prompt = build_prompt("Paris is in France.", "Where is Paris?");
        assert!(prompt.contains("Context:\nParis is in France."));
        assert!(prompt.contains("Question: Where is Paris?"));
        assert!(prompt.ends_with("Answer:"));
    }
}
