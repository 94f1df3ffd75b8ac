//! Snapshot tests for model configuration and resolution

#[cfg(test)]
mod snapshot_tests {
    use crate::{InferenceConfig, GPT_J_6B, MINILM_L6_V2, TINYLLAMA_1_1B_CHAT};
    use insta::assert_yaml_snapshot;
    use ragkit_core::SamplingParams;

    #[test]
    fn test_inference_config_snapshot() {
        let config = InferenceConfig::new("http://localhost:8080", false);

        assert_yaml_snapshot!(config, @r###"
        ---
        inference_url: "http://localhost:8080"
        accelerator: false
        "###);
    }

    #[test]
    fn test_sampling_defaults_snapshot() {
        assert_yaml_snapshot!(SamplingParams::default(), @r###"
        ---
        temperature: 0.7
        top_p: 0.9
        repetition_penalty: 1.05
        max_new_tokens: 100
        "###);
    }

    #[test]
    fn test_backing_model_constants() {
        assert_yaml_snapshot!(MINILM_L6_V2, @r###"
        ---
        sentence-transformers/all-MiniLM-L6-v2
        "###);
        assert_yaml_snapshot!(TINYLLAMA_1_1B_CHAT, @r###"
        ---
        TinyLlama/TinyLlama-1.1B-Chat-v1.0
        "###);
        assert_yaml_snapshot!(GPT_J_6B, @r###"
        ---
        EleutherAI/gpt-j-6B
        "###);
    }
}
