//! Character cursor over the source text
//!
//! The scanner only moves forward. End of input is reached when the cursor
//! equals the source length.

pub struct Scanner {
    source: Vec<char>,
    cursor: usize,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            cursor: 0,
        }
    }

    /// Character under the cursor
    pub fn current(&self) -> Option<char> {
        self.source.get(self.cursor).copied()
    }

    /// Bounded lookahead: up to `len` characters starting at the cursor
    pub fn lookahead(&self, len: usize) -> String {
        let end = (self.cursor + len).min(self.source.len());
        self.source[self.cursor..end].iter().collect()
    }

    /// Consume and return the character under the cursor
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.cursor += 1;
        Some(ch)
    }

    /// Consume characters while `predicate` holds, returning them
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> String {
        let mut taken = String::new();
        while let Some(ch) = self.current() {
            if !predicate(ch) {
                break;
            }
            taken.push(ch);
            self.cursor += 1;
        }
        taken
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.source.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_until_end() {
        let mut scanner = Scanner::new("ab");
        assert_eq!(scanner.current(), Some('a'));
        assert_eq!(scanner.advance(), Some('a'));
        assert_eq!(scanner.advance(), Some('b'));
        assert!(scanner.is_at_end());
        assert_eq!(scanner.advance(), None);
        assert_eq!(scanner.current(), None);
    }

    #[test]
    fn test_lookahead_is_bounded() {
        let mut scanner = Scanner::new("x<=");
        scanner.advance();
        assert_eq!(scanner.lookahead(2), "<=");
        assert_eq!(scanner.lookahead(10), "<=");
        scanner.advance();
        assert_eq!(scanner.lookahead(2), "=");
    }

    #[test]
    fn test_advance_while() {
        let mut scanner = Scanner::new("123abc");
        assert_eq!(scanner.advance_while(|ch| ch.is_ascii_digit()), "123");
        assert_eq!(scanner.current(), Some('a'));
    }
}
