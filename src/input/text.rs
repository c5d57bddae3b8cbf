use crate::engine::error::{load_file_safe, Result};
use std::path::Path;

/// Splits text into display tokens, line by line. Punctuation stays attached.
pub fn split_words(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(str::split_whitespace)
        .map(String::from)
        .collect()
}

pub fn words_from_file(path: &Path) -> Result<Vec<String>> {
    let content = load_file_safe(path)?;
    Ok(split_words(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::ReaderError;
    use std::fs::{self, File};
    use std::io::Write;

    #[test]
    fn test_split_keeps_punctuation() {
        let words = split_words("Hello, my name is Waldo.");
        assert_eq!(words, vec!["Hello,", "my", "name", "is", "Waldo."]);
    }

    #[test]
    fn test_split_across_lines() {
        let words = split_words("first line\n\n  second   line\r\nthird");
        assert_eq!(words, vec!["first", "line", "second", "line", "third"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_words("").is_empty());
    }

    #[test]
    fn test_words_from_file() {
        let path = std::env::temp_dir().join(format!("spotreader-{}-words.txt", std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(b"One two.\nThree").unwrap();

        let words = words_from_file(&path).unwrap();
        assert_eq!(words, vec!["One", "two.", "Three"]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_words_from_missing_file() {
        let result = words_from_file(Path::new("definitely_missing_words.txt"));
        assert!(matches!(result, Err(ReaderError::InvalidInput(_))));
    }
}
