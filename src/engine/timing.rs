use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Non-period run closing with a single period, e.g. "data." or "e.g."
    static ref END_OF_SENTENCE: Regex = Regex::new(r"[^.]+\.$").unwrap();
}

/// Milliseconds between two words at `wpm`, integer division.
pub fn wpm_to_milliseconds(wpm: u32) -> u64 {
    60_000 / u64::from(wpm.max(1))
}

pub fn is_end_of_sentence(token: &str) -> bool {
    END_OF_SENTENCE.is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wpm_to_milliseconds_200() {
        assert_eq!(wpm_to_milliseconds(200), 300);
    }

    #[test]
    fn test_wpm_to_milliseconds_150() {
        assert_eq!(wpm_to_milliseconds(150), 400);
    }

    #[test]
    fn test_wpm_to_milliseconds_truncates() {
        // 60,000 / 350 = 171.43
        assert_eq!(wpm_to_milliseconds(350), 171);
        // 60,000 / 165 = 363.64
        assert_eq!(wpm_to_milliseconds(165), 363);
    }

    #[test]
    fn test_wpm_to_milliseconds_matches_division() {
        for wpm in 1..=2000u32 {
            assert_eq!(wpm_to_milliseconds(wpm), 60_000 / wpm as u64);
        }
    }

    #[test]
    fn test_wpm_to_milliseconds_zero_is_floored() {
        assert_eq!(wpm_to_milliseconds(0), 60_000);
    }

    #[test]
    fn test_sentence_ending_tokens() {
        assert!(is_end_of_sentence("data."));
        assert!(is_end_of_sentence("World."));
        assert!(is_end_of_sentence("e.g."));
    }

    #[test]
    fn test_non_sentence_ending_tokens() {
        assert!(!is_end_of_sentence("Hello"));
        assert!(!is_end_of_sentence("Hello,"));
        assert!(!is_end_of_sentence("why?"));
        assert!(!is_end_of_sentence("."));
        assert!(!is_end_of_sentence("..."));
        assert!(!is_end_of_sentence("3.14"));
        assert!(!is_end_of_sentence(""));
    }
}
