use super::lex::*;
use super::token::*;
use super::LineNumber;

/// One line of source: the optional line number, the token stream
/// the machine walks, and the original text so listings keep the
/// author's spacing.
#[derive(Debug, PartialEq)]
pub struct Line {
    number: LineNumber,
    tokens: Vec<Token>,
    source: String,
}

impl Line {
    pub fn from_str(s: &str) -> Line {
        let (number, tokens) = lex(s);
        let source = match number {
            Some(_) => {
                let text = s.trim_start();
                let digits = text.chars().take_while(|c| c.is_ascii_digit()).count();
                let rest = text[digits..].trim_end();
                rest.strip_prefix(' ').unwrap_or(rest).to_string()
            }
            None => s.trim_end().to_string(),
        };
        Line {
            number,
            tokens,
            source,
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(n) => write!(f, "{} {}", n, self.source),
            None => write!(f, "{}", self.source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let line = Line::from_str("100 PRINT \"hello\"  ");
        assert_eq!(line.number(), Some(100));
        assert_eq!(line.to_string(), "100 PRINT \"hello\"");
        assert!(!line.is_direct());
    }

    #[test]
    fn test_direct() {
        let line = Line::from_str("print 1");
        assert!(line.is_direct());
        assert!(!line.is_empty());
    }

    #[test]
    fn test_delete_marker() {
        let line = Line::from_str("100");
        assert_eq!(line.number(), Some(100));
        assert!(line.is_empty());
    }
}
