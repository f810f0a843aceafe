/// Fixed scaffold sent ahead of every user request.
const INSTRUCTION_SCAFFOLD: &str = "\
Given the user-uploaded product image, transform it into a professional, high-quality product photograph suitable for e-commerce.
- The background should be clean, minimalist, and non-distracting. Use a soft, neutral-colored surface or a subtle gradient.
- Enhance the lighting to be bright and even, highlighting the product's features without harsh shadows.
- Improve color balance and saturation to make the product look appealing and true-to-life.
- Ensure the final image is crisp and high-resolution.
- Do not add any text or watermarks.
- Focus only on improving the existing product image on a better background.";

/// Combine the scaffold with the user's free-text styling request.
pub fn compose_instruction(user_prompt: &str) -> String {
    format!(
        "{INSTRUCTION_SCAFFOLD}\n- User's specific request: \"{}\"",
        user_prompt.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_is_appended_after_scaffold() {
        let text = compose_instruction("  on a wooden table  ");
        assert!(text.starts_with("Given the user-uploaded product image"));
        assert!(text.ends_with("- User's specific request: \"on a wooden table\""));
        assert!(text.contains("Do not add any text or watermarks."));
    }

    #[test]
    fn empty_request_still_carries_scaffold() {
        let text = compose_instruction("");
        assert!(text.contains("professional, high-quality product photograph"));
        assert!(text.ends_with("\"\""));
    }
}
