//! The fixed instruction-following prompt template.
//!
//! The wrapping is static and byte-identical across calls so that output
//! is reproducible for a given engine seed.

/// Wrap sanitized text between the task preamble and the response cue.
pub fn build_prompt(content: &str) -> String {
    format!(
        "Prompt:\nBelow is an instruction that describes a task. \
         Write a response that appropriately completes the request.\n\n\
         ### Instruction:\n{content}\n\n### Response:\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_is_static() {
        let prompt = build_prompt("tell me a joke");
        assert_eq!(
            prompt,
            "Prompt:\nBelow is an instruction that describes a task. \
             Write a response that appropriately completes the request.\n\n\
             ### Instruction:\ntell me a joke\n\n### Response:\n"
        );
    }

    #[test]
    fn test_same_input_same_bytes() {
        assert_eq!(build_prompt("x"), build_prompt("x"));
    }
}
