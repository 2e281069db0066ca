use super::{Error, LineNumber, MaxValue};
use crate::error;
use std::collections::HashMap;
use std::convert::TryFrom;

thread_local!(
    static STRING_TO_TOKEN: HashMap<std::string::String, Token> = WORDS
        .iter()
        .map(|(s, w)| ((*s).to_string(), Token::Word(*w)))
        .chain(
            WORD_OPERATORS
                .iter()
                .map(|(s, o)| ((*s).to_string(), Token::Operator(*o)))
        )
        .collect();
);

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Literal(Literal),
    Word(Word),
    Operator(Operator),
    Ident(Ident),
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        STRING_TO_TOKEN.with(|stt| stt.get(s).cloned())
    }

    /// True when a token can begin an expression. The evaluator uses
    /// this to decide between "missing expression" and "expression
    /// simply absent" for optional operands.
    pub fn is_expression_start(&self) -> bool {
        match self {
            Token::Literal(_) | Token::Ident(_) | Token::LParen => true,
            Token::Operator(op) => op.unary_priority().is_some(),
            _ => false,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Colon => write!(f, ":"),
            Semicolon => write!(f, ";"),
        }
    }
}

impl TryFrom<&Token> for LineNumber {
    type Error = Error;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        let msg = "INVALID LINE NUMBER";
        if let Token::Literal(Literal::Integer(i)) = token {
            if *i >= 0 {
                if *i <= LineNumber::max_value() as i64 {
                    return Ok(Some(*i as u16));
                }
                return Err(error!(Overflow; msg));
            }
        }
        Err(error!(SyntaxError; msg))
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Integer(i64),
    Real(f64),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Integer(i) => write!(f, "{}", i),
            Real(r) => {
                if r.fract() == 0.0 && r.abs() < 1e15 {
                    write!(f, "{:.1}", r)
                } else {
                    write!(f, "{}", r)
                }
            }
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Base,
    Call,
    Case,
    Clear,
    Data,
    Dim,
    Do,
    Else,
    ElseIf,
    End,
    EndFunction,
    EndIf,
    EndSelect,
    EndSub,
    Error,
    Exit,
    ExitDo,
    ExitFunction,
    For,
    Function,
    Gosub,
    Goto,
    If,
    Input,
    Is,
    Let,
    List,
    Load,
    Local,
    Loop,
    New,
    Next,
    On,
    Option,
    Print,
    Randomize,
    Read,
    Rem,
    Repeat,
    Restore,
    Return,
    Run,
    Save,
    Select,
    Step,
    Stop,
    Sub,
    Then,
    To,
    Until,
    Wend,
    While,
}

const WORDS: &[(&str, Word)] = &[
    ("BASE", Word::Base),
    ("CALL", Word::Call),
    ("CASE", Word::Case),
    ("CLEAR", Word::Clear),
    ("DATA", Word::Data),
    ("DIM", Word::Dim),
    ("DO", Word::Do),
    ("ELSE", Word::Else),
    ("ELSEIF", Word::ElseIf),
    ("END", Word::End),
    ("ERROR", Word::Error),
    ("EXIT", Word::Exit),
    ("FOR", Word::For),
    ("FUNCTION", Word::Function),
    ("GOSUB", Word::Gosub),
    ("GOTO", Word::Goto),
    ("IF", Word::If),
    ("INPUT", Word::Input),
    ("IS", Word::Is),
    ("LET", Word::Let),
    ("LIST", Word::List),
    ("LOAD", Word::Load),
    ("LOCAL", Word::Local),
    ("LOOP", Word::Loop),
    ("NEW", Word::New),
    ("NEXT", Word::Next),
    ("ON", Word::On),
    ("OPTION", Word::Option),
    ("PRINT", Word::Print),
    ("RANDOMIZE", Word::Randomize),
    ("READ", Word::Read),
    ("REM", Word::Rem),
    ("REPEAT", Word::Repeat),
    ("RESTORE", Word::Restore),
    ("RETURN", Word::Return),
    ("RUN", Word::Run),
    ("SAVE", Word::Save),
    ("SELECT", Word::Select),
    ("STEP", Word::Step),
    ("STOP", Word::Stop),
    ("SUB", Word::Sub),
    ("THEN", Word::Then),
    ("TO", Word::To),
    ("UNTIL", Word::Until),
    ("WEND", Word::Wend),
    ("WHILE", Word::While),
];

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            EndFunction => write!(f, "END FUNCTION"),
            EndIf => write!(f, "END IF"),
            EndSelect => write!(f, "END SELECT"),
            EndSub => write!(f, "END SUB"),
            ExitDo => write!(f, "EXIT DO"),
            ExitFunction => write!(f, "EXIT FUNCTION"),
            word => {
                for (s, w) in WORDS {
                    if w == word {
                        return write!(f, "{}", s);
                    }
                }
                Err(std::fmt::Error)
            }
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    DivideInt,
    Modulo,
    Plus,
    Minus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Not,
    And,
    Or,
    Xor,
    Eqv,
    Imp,
}

const WORD_OPERATORS: &[(&str, Operator)] = &[
    ("MOD", Operator::Modulo),
    ("NOT", Operator::Not),
    ("AND", Operator::And),
    ("OR", Operator::Or),
    ("XOR", Operator::Xor),
    ("EQV", Operator::Eqv),
    ("IMP", Operator::Imp),
];

impl Operator {
    /// Binding strength as a binary operator, loosest first.
    /// NOT is prefix-only and has no binary priority.
    pub fn binary_priority(&self) -> Option<u8> {
        use Operator::*;
        match self {
            Imp | Eqv => Some(1),
            Xor | Or => Some(2),
            And => Some(3),
            Not => None,
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => Some(5),
            Plus | Minus => Some(6),
            Multiply | Divide | DivideInt | Modulo => Some(7),
            Caret => Some(9),
        }
    }

    /// Binding strength as a prefix operator. Sign binds tighter
    /// than multiplication but looser than `^`, so `-2 ^ 2` is
    /// `-(2 ^ 2)`.
    pub fn unary_priority(&self) -> Option<u8> {
        use Operator::*;
        match self {
            Not => Some(4),
            Plus | Minus => Some(8),
            _ => None,
        }
    }

    pub fn right_associative(&self) -> bool {
        matches!(self, Operator::Caret)
    }

    pub fn is_relation(&self) -> bool {
        use Operator::*;
        matches!(
            self,
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual
        )
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            DivideInt => write!(f, "\\"),
            Modulo => write!(f, "MOD"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            Not => write!(f, "NOT"),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),
            Xor => write!(f, "XOR"),
            Eqv => write!(f, "EQV"),
            Imp => write!(f, "IMP"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Ident {
    Plain(String),
    String(String),
    Integer(String),
}

impl Ident {
    pub fn name(&self) -> &str {
        match self {
            Ident::Plain(s) => s,
            Ident::String(s) => s,
            Ident::Integer(s) => s,
        }
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
