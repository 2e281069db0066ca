use super::{token::*, LineNumber, MaxValue};

pub fn lex(s: &str) -> (LineNumber, Vec<Token>) {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        let mut decimal = false;
        let mut exp = false;
        loop {
            let ch = match self.chars().next() {
                Some(c) => c.to_ascii_uppercase(),
                None => {
                    debug_assert!(false, "Failed to tokenize number.");
                    return None;
                }
            };
            s.push(ch);
            if ch == '.' {
                decimal = true;
            }
            if ch == 'E' {
                exp = true;
                if let Some(sign) = self.chars().peek() {
                    if *sign == '+' || *sign == '-' {
                        s.push(*sign);
                        self.chars().next();
                    }
                }
                while let Some(pk) = self.chars().peek() {
                    if !is_basic_digit(*pk) {
                        break;
                    }
                    s.push(*pk);
                    self.chars().next();
                }
                break;
            }
            if let Some(pk) = self.chars().peek() {
                if is_basic_digit(*pk) {
                    continue;
                }
                if !decimal && *pk == '.' {
                    continue;
                }
                if *pk == 'E' || *pk == 'e' {
                    // Only an exponent when a digit follows, otherwise
                    // "1E" would eat into an identifier.
                    let save = self.chars().clone();
                    self.chars().next();
                    if matches!(self.chars().peek(), Some('+') | Some('-')) {
                        self.chars().next();
                    }
                    let valid = matches!(self.chars().peek(), Some(c) if is_basic_digit(*c));
                    *self.chars() = save;
                    if valid {
                        continue;
                    }
                }
            }
            break;
        }
        if !decimal && !exp {
            if let Ok(i) = s.parse::<i64>() {
                return Some(Token::Literal(Literal::Integer(i)));
            }
        }
        match s.parse::<f64>() {
            Ok(r) => Some(Token::Literal(Literal::Real(r))),
            Err(_) => Some(Token::Unknown(s)),
        }
    }

    fn string(&mut self) -> Option<Token> {
        let mut s = String::new();
        self.chars().next();
        loop {
            if let Some(ch) = self.chars().next() {
                if ch != '"' {
                    s.push(ch);
                    continue;
                }
            }
            return Some(Token::Literal(Literal::String(s)));
        }
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        loop {
            let ch = match self.chars().next() {
                Some(ch) => ch.to_ascii_uppercase(),
                None => {
                    debug_assert!(false, "Failed to tokenize alphabetic.");
                    return None;
                }
            };
            s.push(ch);
            if ch == '$' {
                return Some(Token::Ident(Ident::String(s)));
            }
            if ch == '%' {
                return Some(Token::Ident(Ident::Integer(s)));
            }
            if let Some(pk) = self.chars().peek() {
                if is_basic_alphabetic(*pk) || is_basic_digit(*pk) {
                    continue;
                }
                if *pk == '$' || *pk == '%' {
                    continue;
                }
            }
            break;
        }
        if let Some(token) = Token::from_string(&s) {
            return Some(token);
        }
        Some(Token::Ident(Ident::Plain(s)))
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        let token = match ch {
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            ':' => Token::Colon,
            ';' => Token::Semicolon,
            '^' => Token::Operator(Operator::Caret),
            '*' => Token::Operator(Operator::Multiply),
            '/' => Token::Operator(Operator::Divide),
            '\\' => Token::Operator(Operator::DivideInt),
            '+' => Token::Operator(Operator::Plus),
            '-' => Token::Operator(Operator::Minus),
            '=' => Token::Operator(Operator::Equal),
            '?' => Token::Word(Word::Print),
            '<' => match self.chars().peek() {
                Some('>') => {
                    self.chars().next();
                    Token::Operator(Operator::NotEqual)
                }
                Some('=') => {
                    self.chars().next();
                    Token::Operator(Operator::LessEqual)
                }
                _ => Token::Operator(Operator::Less),
            },
            '>' => match self.chars().peek() {
                Some('=') => {
                    self.chars().next();
                    Token::Operator(Operator::GreaterEqual)
                }
                _ => Token::Operator(Operator::Greater),
            },
            _ => Token::Unknown(ch.to_string()),
        };
        Some(token)
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    remark: bool,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let pk = *self.chars.peek()?;
            if self.remark {
                return Some(Token::Unknown(self.chars.by_ref().collect()));
            }
            if is_basic_whitespace(pk) {
                self.chars.next();
                continue;
            }
            if pk == '\'' {
                self.chars.next();
                self.remark = true;
                return Some(Token::Word(Word::Rem));
            }
            if is_basic_digit(pk) || pk == '.' {
                return self.number();
            }
            if is_basic_alphabetic(pk) {
                let token = self.alphabetic();
                if let Some(Token::Word(Word::Rem)) = &token {
                    self.remark = true;
                }
                return token;
            }
            if pk == '"' {
                return self.string();
            }
            return self.minutia();
        }
    }
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> (LineNumber, Vec<Token>) {
        let mut line_number = None;
        let mut rest = s;
        let trimmed = s.trim_start();
        let digits: String = trimmed.chars().take_while(|c| is_basic_digit(*c)).collect();
        if !digits.is_empty() {
            if let Ok(n) = digits.parse::<u16>() {
                if n <= LineNumber::max_value() {
                    line_number = Some(n);
                    let consumed = s.len() - trimmed.len() + digits.len();
                    rest = &s[consumed..];
                    if let Some(' ') = rest.chars().next() {
                        rest = &rest[1..];
                    }
                }
            }
        }
        let mut tokens: Vec<Token> = BasicLexer {
            chars: rest.chars().peekable(),
            remark: false,
        }
        .collect();
        BasicLexer::collapse_pairs(&mut tokens);
        (line_number, tokens)
    }

    fn collapse_pairs(tokens: &mut Vec<Token>) {
        let mut locs: Vec<(usize, Token)> = vec![];
        for (index, tt) in tokens.windows(2).enumerate() {
            let merged = match (&tt[0], &tt[1]) {
                (Token::Word(Word::End), Token::Word(Word::If)) => Some(Word::EndIf),
                (Token::Word(Word::End), Token::Word(Word::Select)) => Some(Word::EndSelect),
                (Token::Word(Word::End), Token::Word(Word::Function)) => Some(Word::EndFunction),
                (Token::Word(Word::End), Token::Word(Word::Sub)) => Some(Word::EndSub),
                (Token::Word(Word::Exit), Token::Word(Word::Do)) => Some(Word::ExitDo),
                (Token::Word(Word::Exit), Token::Word(Word::Function)) => Some(Word::ExitFunction),
                (Token::Ident(Ident::Plain(go)), Token::Word(Word::To)) if go == "GO" => {
                    Some(Word::Goto)
                }
                (Token::Ident(Ident::Plain(go)), Token::Word(Word::Sub)) if go == "GO" => {
                    Some(Word::Gosub)
                }
                _ => None,
            };
            if let Some(word) = merged {
                locs.push((index, Token::Word(word)));
            }
        }
        while let Some((index, token)) = locs.pop() {
            tokens.splice(index..index + 2, Some(token));
        }
    }
}
