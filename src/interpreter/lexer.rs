use std::fmt;

use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in a formula.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Spaces and tabs separate tokens and are otherwise discarded; any other
/// character outside the formula alphabet is a lexing error.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    /// Decimal literal tokens, such as `3`, `3.14`, `2.` or `.5`. There is no
    /// exponent form.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Identifier tokens; symbol or function names such as `lbda` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// End of input. Never matched by the lexer; [`tokenize`] appends it.
    End,
}

fn parse_number(lex: &mut logos::Lexer<'_, Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::DoubleStar => write!(f, "'**'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
            Self::Equals => write!(f, "'='"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// Converts formula text into a sequence of tokens.
///
/// Each token is paired with the byte offset where it starts. The sequence is
/// always terminated by [`Token::End`], positioned at the end of the input.
///
/// # Errors
/// Returns [`ParseError::MalformedInput`] for the first character that is not
/// part of the formula alphabet `[A-Za-z0-9_.+-*/()[],= \t]`.
///
/// # Example
/// ```
/// use formula_dispersion::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x ** 2").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x".to_string()), 0),
///                 (Token::DoubleStar, 2),
///                 (Token::Number(2.0), 5),
///                 (Token::End, 6)]);
///
/// assert!(tokenize("x % 2").is_err());
/// ```
pub fn tokenize(formula: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(formula);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            return Err(ParseError::MalformedInput { fragment: lexer.slice().to_string(),
                                                    position: lexer.span().start, });
        }
    }
    tokens.push((Token::End, formula.len()));

    log::trace!("tokenized {formula:?} into {} tokens", tokens.len());
    Ok(tokens)
}
