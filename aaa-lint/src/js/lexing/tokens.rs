//! Token definitions for the JavaScript/TypeScript front-end
//!
//! Only the tokens the call extraction needs are told apart. Operators collapse into
//! [`Token::Punct`], one character each, so that `=>` and `?.` always win over them.
use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f\u{000B}\u{00A0}\u{FEFF}\u{2028}\u{2029}]+")]
pub enum Token {
    #[regex(r"//[^\n\r]*")]
    LineComment,
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r"[\p{L}_$][\p{L}\p{N}_$]*")]
    Identifier,
    #[regex(r"[0-9][0-9A-Za-z_]*(\.[0-9A-Za-z_]*)?")]
    Number,
    #[regex(r#""([^"\\\n]|\\(.|\n))*""#)]
    #[regex(r"'([^'\\\n]|\\(.|\n))*'")]
    String,
    /// Template literals are kept whole, `${}` substitutions included
    #[regex(r"`([^`\\]|\\(.|\n))*`")]
    Template,

    #[token("=>")]
    Arrow,
    #[token(".")]
    Dot,
    #[token("?.")]
    OptionalDot,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    /// Division, or the opening of a regular expression literal
    #[token("/")]
    #[token("/=")]
    Slash,

    #[regex(r"[-+*%=<>!&|^~?:@#]")]
    Punct,
}

impl Token {
    pub fn is_comment(&self) -> bool {
        matches!(self, Token::LineComment | Token::BlockComment)
    }
}
