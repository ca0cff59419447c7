use shared::core::constants::{ASSISTANT_ROLE, IM_END, IM_START, USER_ROLE};

/// Wraps a single prompt/response turn into one ChatML-style conversation:
///
/// ```text
/// <im_start>user
/// {prompt}<im_end>
/// <im_start>assistant
/// {response}<im_end>
/// ```
///
/// Both sides are inserted verbatim.
pub fn format_conversation(prompt: &str, response: &str) -> String {
    format!(
        "{IM_START}{USER_ROLE}\n{prompt}{IM_END}\n{IM_START}{ASSISTANT_ROLE}\n{response}{IM_END}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_exact_layout() {
        assert_eq!(
            format_conversation("hi", "yo"),
            "<im_start>user\nhi<im_end>\n<im_start>assistant\nyo<im_end>"
        );
    }

    #[test]
    fn inserts_text_verbatim() {
        let text = format_conversation("  line one\nline two ", "{\"json\": true}\n");
        assert_eq!(
            text,
            "<im_start>user\n  line one\nline two <im_end>\n<im_start>assistant\n{\"json\": true}\n<im_end>"
        );
    }

    #[test]
    fn distinct_prompts_give_distinct_text() {
        assert_ne!(format_conversation("a", "r"), format_conversation("b", "r"));
    }
}
