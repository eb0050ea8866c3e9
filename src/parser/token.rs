//! Token vocabulary shared by the lexer and the parser.

use std::fmt;

/// Every kind of token the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Declare, // declarar
    Print,   // imprimir

    // Operators
    Equals, // =
    Plus,   // +
    Minus,  // -
    Star,   // *
    Slash,  // /

    // Punctuation
    LParen,    // (
    RParen,    // )
    Semicolon, // ;

    // Literals and names
    Identifier,
    Number,

    // End of file
    Eof,
}

impl TokenKind {
    /// Resolve a scanned word to its keyword kind, if it is one.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        match word {
            "declarar" => Some(TokenKind::Declare),
            "imprimir" => Some(TokenKind::Print),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Declare => "'declarar'",
            TokenKind::Print => "'imprimir'",
            TokenKind::Equals => "'='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Semicolon => "';'",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Eof => "end of file",
        };
        f.write_str(name)
    }
}

/// A single lexical unit.
///
/// `text` is the exact slice of source the token was scanned from, so numbers
/// keep their textual form until the parser converts them. The end-of-file
/// token has empty text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of file"),
            TokenKind::Identifier => write!(f, "identifier '{}'", self.text),
            TokenKind::Number => write!(f, "number {}", self.text),
            kind => write!(f, "{}", kind),
        }
    }
}
