//! Alias to backing-model resolution
//!
//! Aliases are matched case-insensitively by substring. Two different
//! aliases may resolve to the same backing model, in which case they
//! share one loaded instance (the registry caches by backing id, not
//! by alias).

use ragkit_core::{Error, Result};

/// Embedding backing models
pub const MINILM_L6_V2: &str = "sentence-transformers/all-MiniLM-L6-v2";
pub const BGE_BASE_EN_V15: &str = "BAAI/bge-base-en-v1.5";

/// Generation backing models
pub const TINYLLAMA_1_1B_CHAT: &str = "TinyLlama/TinyLlama-1.1B-Chat-v1.0";
pub const DISTILGPT2: &str = "distilgpt2";
pub const GPT_J_6B: &str = "EleutherAI/gpt-j-6B";
pub const LLAMA_2_7B_CHAT: &str = "meta-llama/Llama-2-7b-chat-hf";

/// Outcome of resolving a generation alias.
///
/// `downgraded` is set when the requested alias was forced onto a small
/// CPU-friendly model because no accelerator is available. The policy
/// avoids unbounded latency on constrained hardware; the flag surfaces
/// it instead of hiding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGeneration {
    pub backing_id: &'static str,
    pub downgraded: bool,
}

/// Resolve an embedding alias to its backing-model identifier.
///
/// Fails with `Error::UnsupportedModel` when the alias matches no known
/// embedding model.
pub fn resolve_embedding(alias: &str) -> Result<&'static str> {
    let alias_lower = alias.to_lowercase();

    if alias_lower.contains("mini") || alias_lower.contains("minilm") {
        Ok(MINILM_L6_V2)
    } else if alias_lower.contains("bge") {
        Ok(BGE_BASE_EN_V15)
    } else {
        Err(Error::UnsupportedModel(format!(
            "no embedding model matches alias '{}'",
            alias
        )))
    }
}

/// Resolve a generation alias to its backing-model identifier.
///
/// Without an accelerator every alias maps to a small CPU-friendly
/// model. With one, known large-model names map to their full-size
/// backing models and unrecognized aliases fall back to a small default
/// rather than erroring.
pub fn resolve_generation(alias: &str, accelerator: bool) -> ResolvedGeneration {
    let alias_lower = alias.to_lowercase();

    if !accelerator {
        let backing_id = if alias_lower.contains("llama") {
            TINYLLAMA_1_1B_CHAT
        } else {
            DISTILGPT2
        };
        return ResolvedGeneration {
            backing_id,
            downgraded: true,
        };
    }

    let backing_id = match alias_lower.as_str() {
        "gpt-j" | "gptj" | "gpt-j-6b" => GPT_J_6B,
        _ if alias_lower.contains("llama") => LLAMA_2_7B_CHAT,
        _ => TINYLLAMA_1_1B_CHAT,
    };

    ResolvedGeneration {
        backing_id,
        downgraded: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_aliases() {
        assert_eq!(resolve_embedding("minilm").unwrap(), MINILM_L6_V2);
        assert_eq!(resolve_embedding("all-MiniLM-L6-v2").unwrap(), MINILM_L6_V2);
        assert_eq!(resolve_embedding("bge-base").unwrap(), BGE_BASE_EN_V15);
        assert_eq!(resolve_embedding("BGE").unwrap(), BGE_BASE_EN_V15);
    }

    #[test]
    fn test_unknown_embedding_alias_is_an_error() {
        let err = resolve_embedding("unknown-model-xyz").unwrap_err();
        assert!(matches!(err, Error::UnsupportedModel(_)));
    }

    #[test]
    fn test_cpu_generation_is_downgraded() {
        let resolved = resolve_generation("llama-2-7b", false);
        assert_eq!(resolved.backing_id, TINYLLAMA_1_1B_CHAT);
        assert!(resolved.downgraded);

        let resolved = resolve_generation("gpt-j", false);
        assert_eq!(resolved.backing_id, DISTILGPT2);
        assert!(resolved.downgraded);
    }

    #[test]
    fn test_accelerated_generation_resolution() {
        let resolved = resolve_generation("gpt-j", true);
        assert_eq!(resolved.backing_id, GPT_J_6B);
        assert!(!resolved.downgraded);

        let resolved = resolve_generation("Llama-2", true);
        assert_eq!(resolved.backing_id, LLAMA_2_7B_CHAT);

        // Unrecognized aliases fall back to the small default, no error
        let resolved = resolve_generation("mystery-model", true);
        assert_eq!(resolved.backing_id, TINYLLAMA_1_1B_CHAT);
    }
}
