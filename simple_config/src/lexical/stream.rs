//! Character source for the lexer with a single character of pushback

use std::str::Chars;

/// Forward-only character stream over borrowed text.
///
/// `unget` returns exactly one character to the stream; the lexer never
/// needs more lookahead than that.
#[derive(Debug, Clone)]
pub struct CharStream<'a> {
    chars: Chars<'a>,
    pushback: Option<char>,
}

impl<'a> CharStream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            pushback: None,
        }
    }

    /// Next character, or `None` once the text is exhausted
    pub fn get(&mut self) -> Option<char> {
        self.pushback.take().or_else(|| self.chars.next())
    }

    /// Push `c` back so the next `get` returns it
    pub fn unget(&mut self, c: char) {
        debug_assert!(self.pushback.is_none(), "only one character of pushback");
        self.pushback = Some(c);
    }

    /// Look at the next character without consuming it
    pub fn peek(&mut self) -> Option<char> {
        let next = self.get()?;
        self.unget(next);
        Some(next)
    }

    /// Consume the next character if `accept` holds for it
    pub fn next_if(&mut self, accept: impl FnOnce(char) -> bool) -> Option<char> {
        let next = self.get()?;
        if accept(next) {
            Some(next)
        } else {
            self.unget(next);
            None
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.pushback.is_none() && self.chars.as_str().is_empty()
    }
}

impl<'a> From<&'a str> for CharStream<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_unget() {
        let mut stream = CharStream::new("ab");
        assert_eq!(stream.get(), Some('a'));
        stream.unget('a');
        assert_eq!(stream.get(), Some('a'));
        assert_eq!(stream.get(), Some('b'));
        assert_eq!(stream.get(), None);
        assert_eq!(stream.get(), None);
    }

    #[test]
    fn test_peek_and_next_if() {
        let mut stream = CharStream::new("x1");
        assert_eq!(stream.peek(), Some('x'));
        assert_eq!(stream.next_if(|c| c.is_ascii_digit()), None);
        assert_eq!(stream.next_if(|c| c == 'x'), Some('x'));
        assert_eq!(stream.next_if(|c| c.is_ascii_digit()), Some('1'));
        assert!(stream.is_exhausted());
    }

    #[test]
    fn test_multibyte_characters() {
        let mut stream = CharStream::from("é€");
        assert_eq!(stream.get(), Some('é'));
        assert_eq!(stream.get(), Some('€'));
        assert!(stream.is_exhausted());
    }
}
