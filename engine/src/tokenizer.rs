/// Split text into words on single space characters. Consecutive, leading,
/// and trailing spaces produce no empty words.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

/// Text is valid when it carries no C0 control characters (code points 0-31).
pub fn is_valid_text(text: &str) -> bool {
    !text.chars().any(|symbol| (symbol as u32) <= 31)
}
