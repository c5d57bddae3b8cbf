use crate::engine::error::{ReaderError, Result};

pub const DEMO_SENTENCE: &str = "Hello my name is Waldo and today I am going to find myself";

/// Forward-only supplier of tokens. Returning `None` means the source is
/// exhausted; callers must not poll it again expecting more.
pub trait TokenSource {
    fn next_token(&mut self) -> Option<String>;
}

impl<I> TokenSource for I
where
    I: Iterator,
    I::Item: Into<String>,
{
    fn next_token(&mut self) -> Option<String> {
        self.next().map(Into::into)
    }
}

/// Endless generator that repeats a fixed list of words.
#[derive(Debug, Clone)]
pub struct WordCycle {
    words: Vec<String>,
    index: usize,
}

impl WordCycle {
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.trim().is_empty())
            .collect();

        if words.is_empty() {
            return Err(ReaderError::InvalidInput(
                "cannot cycle over an empty word list".to_string(),
            ));
        }

        Ok(Self { words, index: 0 })
    }

    pub fn demo() -> Self {
        Self {
            words: DEMO_SENTENCE.split_whitespace().map(String::from).collect(),
            index: 0,
        }
    }
}

impl Iterator for WordCycle {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let word = self.words[self.index % self.words.len()].clone();
        self.index = (self.index + 1) % self.words.len();
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
