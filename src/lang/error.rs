use super::LineNumber;

#[derive(Clone)]
pub struct Error {
    code: u16,
    line_number: LineNumber,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: "",
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn is_break(&self) -> bool {
        self.code == ErrorCode::Break as u16 || self.code == ErrorCode::Halted as u16
    }

    pub fn is_halted(&self) -> bool {
        self.code == ErrorCode::Halted as u16
    }

    pub fn in_line_number(&self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            code: self.code,
            line_number: line,
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            message,
        }
    }
}

pub enum ErrorCode {
    NextWithoutFor = 1,
    SyntaxError = 2,
    ReturnWithoutGosub = 3,
    OutOfData = 4,
    IllegalFunctionCall = 5,
    Overflow = 6,
    OutOfMemory = 7,
    UndefinedLine = 8,
    SubscriptOutOfRange = 9,
    RedimensionedArray = 10,
    DivisionByZero = 11,
    IllegalDirect = 12,
    TypeMismatch = 13,
    MissingExpression = 22,
    LineBufferOverflow = 23,
    UndeclaredIdentifier = 24,
    Redeclaration = 25,
    StrayFor = 26,
    VoidValue = 27,
    BadConversion = 28,
    StrayWhile = 29,
    StrayWend = 30,
    StrayIf = 31,
    StrayEndIf = 32,
    StrayElse = 33,
    StrayDo = 34,
    StrayLoop = 35,
    StrayRepeat = 36,
    StrayUntil = 37,
    StraySelect = 38,
    StrayCase = 39,
    StrayEndSelect = 40,
    StrayFunction = 41,
    StrayEndFunction = 42,
    StraySub = 43,
    StrayEndSub = 44,
    StrayExitDo = 45,
    StrayExitFunction = 46,
    Break = 47,
    Halted = 48,
    InternalError = 51,
    FileNotFound = 53,
    DirectStatementInFile = 66,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "NEXT WITHOUT FOR",
            2 => "SYNTAX ERROR",
            3 => "RETURN WITHOUT GOSUB",
            4 => "OUT OF DATA",
            5 => "ILLEGAL FUNCTION CALL",
            6 => "OVERFLOW",
            7 => "OUT OF MEMORY",
            8 => "UNDEFINED LINE",
            9 => "SUBSCRIPT OUT OF RANGE",
            10 => "REDIMENSIONED ARRAY",
            11 => "DIVISION BY ZERO",
            12 => "ILLEGAL DIRECT",
            13 => "TYPE MISMATCH",
            22 => "MISSING EXPRESSION",
            23 => "LINE BUFFER OVERFLOW",
            24 => "UNDECLARED IDENTIFIER",
            25 => "REDECLARED IDENTIFIER",
            26 => "FOR WITHOUT NEXT",
            27 => "VOID VALUE",
            28 => "BAD CONVERSION",
            29 => "WHILE WITHOUT WEND",
            30 => "WEND WITHOUT WHILE",
            31 => "IF WITHOUT END IF",
            32 => "END IF WITHOUT IF",
            33 => "ELSE WITHOUT IF",
            34 => "DO WITHOUT LOOP",
            35 => "LOOP WITHOUT DO",
            36 => "REPEAT WITHOUT UNTIL",
            37 => "UNTIL WITHOUT REPEAT",
            38 => "SELECT WITHOUT END SELECT",
            39 => "CASE WITHOUT SELECT",
            40 => "END SELECT WITHOUT SELECT",
            41 => "FUNCTION WITHOUT END FUNCTION",
            42 => "END FUNCTION WITHOUT FUNCTION",
            43 => "SUB WITHOUT END SUB",
            44 => "END SUB WITHOUT SUB",
            45 => "EXIT DO WITHOUT DO",
            46 => "EXIT FUNCTION WITHOUT FUNCTION",
            47 => "BREAK",
            48 => "END OF PROGRAM",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            66 => "DIRECT STATEMENT IN FILE",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}
