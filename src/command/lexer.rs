//! Lexer for dialog command lines using logos
//!
//! Words are separated by whitespace. Double-quoted strings may contain
//! whitespace and backslash escapes; they are kept distinct from bare words so
//! that a quoted `"apply"` is a title, never an option keyword.

use logos::Logos;

/// Token type for the command lexer
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // Quoted strings, escapes resolved. A missing closing quote swallows
    // the rest of the line.
    #[regex(r#""([^"\\]|\\.)*"?"#, |lex| unescape(&lex.slice()[1..]))]
    Quoted(String),

    // Anything else up to whitespace or a quote
    #[regex(r#"[^ \t\r\n\f"]+"#, |lex| lex.slice().to_string())]
    Word(String),
}

impl Token {
    /// Token text, regardless of quoting
    pub fn as_str(&self) -> &str {
        match self {
            Token::Quoted(s) | Token::Word(s) => s,
        }
    }

    /// Consume into the token text
    pub fn into_string(self) -> String {
        match self {
            Token::Quoted(s) | Token::Word(s) => s,
        }
    }

    /// True for an unquoted word equal to `keyword` (case-insensitive)
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Token::Word(w) if w.eq_ignore_ascii_case(keyword))
    }
}

/// Resolve escapes up to the first unescaped quote
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => break,
            '\\' => match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(other) => out.push(other),
                None => {}
            },
            _ => out.push(c),
        }
    }
    out
}

/// Split a command line into tokens, dropping (and logging) anything the
/// lexer rejects
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(tok) => tokens.push(tok),
            Err(_) => crate::log!(
                "tokenize: unexpected '{}' at position {}",
                lexer.slice(),
                lexer.span().start
            ),
        }
    }
    tokens
}
