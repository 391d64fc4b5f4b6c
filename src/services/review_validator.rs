//! 评论校验 - 业务能力层
//!
//! 纯函数，无副作用。既用于输入时的即时提示，也用于提交前的闸门。

use crate::error::ValidationError;

/// 最少单词数
pub const MIN_WORDS: usize = 10;
/// 最多单词数
pub const MAX_WORDS: usize = 256;
/// 单个单词最大字符数
pub const MAX_WORD_LENGTH: usize = 30;

/// 校验评论文本
///
/// 规则按固定顺序执行，命中第一条即返回：
/// 1. 去掉首尾空白后为空
/// 2. 不含任何字母
/// 3. 单词数少于 [`MIN_WORDS`]
/// 4. 单词数多于 [`MAX_WORDS`]
/// 5. 存在超过 [`MAX_WORD_LENGTH`] 个字符的单词
pub fn validate_review(text: &str) -> Result<(), ValidationError> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    if !trimmed.chars().any(char::is_alphabetic) {
        return Err(ValidationError::NoLetters);
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();

    if words.len() < MIN_WORDS {
        return Err(ValidationError::TooFewWords);
    }

    if words.len() > MAX_WORDS {
        return Err(ValidationError::TooManyWords);
    }

    if words.iter().any(|word| word.chars().count() > MAX_WORD_LENGTH) {
        return Err(ValidationError::WordTooLong);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize, word: &str) -> String {
        vec![word; n].join(" ")
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(validate_review(""), Err(ValidationError::Empty));
        assert_eq!(validate_review("     "), Err(ValidationError::Empty));
        assert_eq!(validate_review("\n\t "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_no_letters() {
        assert_eq!(
            validate_review("123 456 789 000 !@# $%^ &*( )"),
            Err(ValidationError::NoLetters)
        );
    }

    #[test]
    fn test_no_letters_precedes_word_count() {
        // 只有 1 个“单词”，但字母规则优先
        assert_eq!(validate_review("12345"), Err(ValidationError::NoLetters));
    }

    #[test]
    fn test_cyrillic_counts_as_letter() {
        let text = words(10, "фильм");
        assert_eq!(validate_review(&text), Ok(()));
    }

    #[test]
    fn test_too_few_words() {
        assert_eq!(
            validate_review("This movie was absolutely wonderful and touching"),
            Err(ValidationError::TooFewWords)
        );
        assert_eq!(validate_review("Bad movie"), Err(ValidationError::TooFewWords));
    }

    #[test]
    fn test_word_count_precedes_word_length() {
        let text = format!("one two three four {}", "a".repeat(40));
        assert_eq!(validate_review(&text), Err(ValidationError::TooFewWords));
    }

    #[test]
    fn test_word_count_boundaries() {
        assert_eq!(validate_review(&words(9, "good")), Err(ValidationError::TooFewWords));
        assert_eq!(validate_review(&words(10, "good")), Ok(()));
        assert_eq!(validate_review(&words(256, "good")), Ok(()));
        assert_eq!(validate_review(&words(257, "good")), Err(ValidationError::TooManyWords));
        assert_eq!(validate_review(&words(300, "Word")), Err(ValidationError::TooManyWords));
    }

    #[test]
    fn test_word_length_boundaries() {
        let ok = format!("{} {}", words(9, "fine"), "x".repeat(30));
        assert_eq!(validate_review(&ok), Ok(()));

        let too_long = format!("{} {}", words(9, "fine"), "x".repeat(31));
        assert_eq!(validate_review(&too_long), Err(ValidationError::WordTooLong));
    }

    #[test]
    fn test_word_length_counts_chars_not_bytes() {
        // 30 个西里尔字母占 60 字节
        let text = format!("{} {}", words(9, "fine"), "ж".repeat(30));
        assert_eq!(validate_review(&text), Ok(()));
    }

    #[test]
    fn test_long_word_in_sentence() {
        let text = "This is a normal sentence with a verylongwordthatexceedsthemaximumlength in it.";
        assert_eq!(validate_review(text), Err(ValidationError::WordTooLong));
    }

    #[test]
    fn test_runs_of_whitespace_split_once() {
        let text = "  one   two\tthree\n\nfour five six  seven eight nine ten  ";
        assert_eq!(validate_review(text), Ok(()));
    }

    #[test]
    fn test_deterministic() {
        let text = "This is an amazing movie, I really enjoyed it! It had great performances.";
        assert_eq!(validate_review(text), validate_review(text));
    }
}
