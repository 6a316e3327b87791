//! Document-wide token stream.
//!
//! [`DocumentTokens`] walks the lines of a document, tokenizes each one and
//! assigns every emitted token its 1-based occurrence position. A single
//! counter spans line boundaries: a line break neither resets nor skips a
//! position, and empty fragments never consume one.

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Lazy, finite, non-restartable iterator of position-stamped tokens.
///
/// The first line error (or tokenizer error) is yielded once and ends the
/// stream.
pub struct DocumentTokens<I> {
    lines: I,
    tokenizer: Arc<dyn Tokenizer>,
    current: Option<TokenStream>,
    position: usize,
    lines_read: usize,
    finished: bool,
}

impl<I> DocumentTokens<I>
where
    I: Iterator<Item = Result<String>>,
{
    /// Create a token stream over `lines`.
    pub fn new(tokenizer: Arc<dyn Tokenizer>, lines: I) -> Self {
        DocumentTokens {
            lines,
            tokenizer,
            current: None,
            position: 0,
            lines_read: 0,
            finished: false,
        }
    }

    /// Continue numbering after `position` instead of starting at 1.
    pub fn starting_after(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Position of the most recently emitted token (0 before the first).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

impl<I> Iterator for DocumentTokens<I>
where
    I: Iterator<Item = Result<String>>,
{
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            if let Some(stream) = self.current.as_mut() {
                if let Some(mut token) = stream.next() {
                    if token.is_empty() {
                        continue;
                    }
                    self.position += 1;
                    token.position = self.position;
                    return Some(Ok(token));
                }
                self.current = None;
            }

            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    return None;
                }
            };
            self.lines_read += 1;

            match self.tokenizer.tokenize(&line) {
                Ok(stream) => self.current = Some(stream),
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Tokenize an in-memory document, line by line.
pub fn tokenize_text(tokenizer: Arc<dyn Tokenizer>, text: &str) -> Result<Vec<Token>> {
    DocumentTokens::new(tokenizer, text.lines().map(|line| Ok(line.to_string()))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::IntoTokenStream;
    use crate::analysis::tokenizer::regex::RegexTokenizer;
    use crate::error::WordscopeError;

    fn tokenizer() -> Arc<dyn Tokenizer> {
        Arc::new(RegexTokenizer::new().unwrap())
    }

    #[test]
    fn test_positions_are_one_based() {
        let tokens = tokenize_text(tokenizer(), "ab cd, efg! ab").unwrap();
        let pairs: Vec<(&str, usize)> = tokens
            .iter()
            .map(|t| (t.text.as_str(), t.position))
            .collect();
        assert_eq!(pairs, vec![("ab", 1), ("cd", 2), ("efg", 3), ("ab", 4)]);
    }

    #[test]
    fn test_positions_span_lines() {
        let text = "one two\n\n,,,\nthree\nfour five";
        let tokens = tokenize_text(tokenizer(), text).unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5]);
        assert_eq!(tokens[2].text, "three");
    }

    #[test]
    fn test_empty_document() {
        assert!(tokenize_text(tokenizer(), "").unwrap().is_empty());
    }

    #[test]
    fn test_counts_lines_and_position() {
        let lines = vec![Ok("a b".to_string()), Ok(String::new()), Ok("c".to_string())];
        let mut stream = DocumentTokens::new(tokenizer(), lines.into_iter());
        assert_eq!(stream.position(), 0);
        let tokens: Vec<_> = stream.by_ref().collect::<Result<_>>().unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(stream.position(), 3);
        assert_eq!(stream.lines_read(), 3);
    }

    #[test]
    fn test_read_error_ends_stream() {
        let lines = vec![
            Ok("a b".to_string()),
            Err(WordscopeError::input_read("device went away")),
            Ok("c".to_string()),
        ];
        let results: Vec<_> = DocumentTokens::new(tokenizer(), lines.into_iter()).collect();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(matches!(results[2], Err(WordscopeError::InputRead(_))));
    }

    #[test]
    fn test_starting_after() {
        let lines = vec![Ok("x y".to_string())];
        let tokens: Vec<Token> = DocumentTokens::new(tokenizer(), lines.into_iter())
            .starting_after(10)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(tokens[0].position, 11);
        assert_eq!(tokens[1].position, 12);
    }

    struct FragmentTokenizer;

    impl Tokenizer for FragmentTokenizer {
        fn tokenize(&self, text: &str) -> Result<TokenStream> {
            let tokens: Vec<Token> = text
                .split(',')
                .enumerate()
                .map(|(i, s)| Token::new(s, i))
                .collect();
            Ok(tokens.into_token_stream())
        }

        fn name(&self) -> &'static str {
            "fragment"
        }
    }

    #[test]
    fn test_empty_fragments_consume_no_position() {
        let tokens = tokenize_text(Arc::new(FragmentTokenizer), "a,,b,\n,c").unwrap();
        let pairs: Vec<(&str, usize)> = tokens
            .iter()
            .map(|t| (t.text.as_str(), t.position))
            .collect();
        assert_eq!(pairs, vec![("a", 1), ("b", 2), ("c", 3)]);
    }
}
