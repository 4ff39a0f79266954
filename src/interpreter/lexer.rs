use logos::Logos;

use crate::{
    ast::Literal,
    error::{Error, ErrorKind},
    util::num::format_real,
};

/// A location inside a source line.
///
/// Positions are cheap immutable snapshots: anything that needs to remember
/// where a token started copies the value instead of holding a reference into
/// lexer state. `offset` is a byte offset into the line; `line` and `column`
/// count runes, with a newline resetting the column to 0 and bumping the
/// line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset into the source line.
    pub offset: usize,
    /// Zero-based line number.
    pub line:   usize,
    /// Zero-based column, counted in runes.
    pub column: usize,
}

impl Position {
    /// Computes the position of a byte offset by walking the text one rune at
    /// a time.
    ///
    /// # Parameters
    /// - `text`: The source line being tokenized.
    /// - `offset`: A byte offset into `text`, as reported by the lexer.
    ///
    /// # Example
    /// ```
    /// use basix::interpreter::lexer::Position;
    ///
    /// let pos = Position::locate("1 + 2", 4);
    /// assert_eq!(pos.column, 4);
    /// assert_eq!(pos.line, 0);
    /// ```
    #[must_use]
    pub fn locate(text: &str, offset: usize) -> Self {
        let mut line = 0;
        let mut column = 0;
        for (idx, ch) in text.char_indices() {
            if idx >= offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        Self { offset, line, column }
    }
}

/// A reserved control-flow word.
///
/// Keywords are recognized by the lexer and accepted by the parser in call
/// position, but carry no executable semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Goto,
    Read,
    Write,
    While,
    If,
    For,
    Func,
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Goto => "goto",
            Self::Read => "read",
            Self::Write => "write",
            Self::While => "while",
            Self::If => "if",
            Self::For => "for",
            Self::Func => "func",
        };
        write!(f, "{name}")
    }
}

/// A built-in type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    Int,
    Char,
    Str,
    Bool,
    Float,
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Char => "char",
            Self::Str => "str",
            Self::Bool => "bool",
            Self::Float => "float",
        };
        write!(f, "{name}")
    }
}

/// Error detail produced inside the logos state machine.
///
/// Converted into a full [`Error`] (with positions and a message) by
/// [`tokenize`], which still has the span and slice at hand.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LexErrorKind {
    /// No rule matched the input. This is the logos default and covers stray
    /// characters as well as `!` not followed by `=`.
    #[default]
    IllegalCharacter,
    /// A quoted literal ran to the end of the line without a closing quote.
    UnterminatedQuote,
    /// An integer literal does not fit an `i64`.
    IntegerOverflow,
}

/// Represents a lexical token kind in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Literal payloads live directly inside the variant, so a `TokenKind` is
/// both the classification and, where applicable, the value.
///
/// `Char` and `EndOfInput` carry no patterns: `Char` is produced by
/// [`tokenize`] when a quoted literal holds exactly one rune, and
/// `EndOfInput` is appended once the line is exhausted.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
#[logos(error = LexErrorKind)]
pub enum TokenKind {
    /// Floating-point literal such as `3.14` or `12.` (a second `.` ends the
    /// number and is left for the next scan pass, where it is illegal).
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(f64),
    /// Integer literal such as `42`. No exponent notation, no underscores.
    #[regex(r"[0-9]+", parse_integer)]
    Int(i64),
    /// `true` or `false`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// Quoted literal of any length other than one rune. Either quote
    /// character delimits; `\n` and `\t` are the only escapes with special
    /// meaning, every other escaped rune is taken literally.
    #[regex(r#""([^"\\]|\\.)*""#, unescape_quoted)]
    #[regex(r"'([^'\\]|\\.)*'", unescape_quoted)]
    #[regex(r#""([^"\\]|\\.)*"#, missing_quote)]
    #[regex(r"'([^'\\]|\\.)*", missing_quote)]
    String(String),
    /// Quoted literal holding exactly one rune.
    Char(char),
    /// Reserved control-flow word.
    #[token("goto", |_| Keyword::Goto)]
    #[token("read", |_| Keyword::Read)]
    #[token("write", |_| Keyword::Write)]
    #[token("while", |_| Keyword::While)]
    #[token("if", |_| Keyword::If)]
    #[token("for", |_| Keyword::For)]
    #[token("func", |_| Keyword::Func)]
    Keyword(Keyword),
    /// Built-in type name.
    #[token("int", |_| TypeName::Int)]
    #[token("char", |_| TypeName::Char)]
    #[token("str", |_| TypeName::Str)]
    #[token("bool", |_| TypeName::Bool)]
    #[token("float", |_| TypeName::Float)]
    Type(TypeName),
    /// Identifier: a letter followed by letters, digits, or underscores.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `^`
    #[token("^")]
    Pow,
    /// `=`
    #[token("=")]
    Assign,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `<=`
    #[token("<=")]
    Lte,
    /// `>=`
    #[token(">=")]
    Gte,
    /// Synthetic terminator appended after the last real token.
    EndOfInput,
}

/// Parses a floating-point literal from the current token slice.
///
/// Digit strings with at most one `.` always parse, so this cannot fail.
fn parse_float(lex: &mut logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// A literal too large for `i64` is a tokenize-time overflow, not a silent
/// wraparound.
fn parse_integer(lex: &mut logos::Lexer<TokenKind>) -> Result<i64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::IntegerOverflow)
}

/// Unescapes the body of a terminated quoted literal.
///
/// `\n` and `\t` map to newline and tab; any other escaped rune stands for
/// itself.
fn unescape_quoted(lex: &mut logos::Lexer<TokenKind>) -> String {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(other) => out.push(other),
                None => {},
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Matched a quoted literal with no terminating quote.
fn missing_quote(_lex: &mut logos::Lexer<TokenKind>) -> Result<String, LexErrorKind> {
    Err(LexErrorKind::UnterminatedQuote)
}

impl std::fmt::Display for TokenKind {
    /// Renders the token in re-tokenizable source form: retokenizing the
    /// printed form of a token sequence reproduces the same kinds.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{}", format_real(*v)),
            Self::Int(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::String(s) => {
                write!(f, "\"")?;
                for ch in s.chars() {
                    write_escaped(f, ch, '"')?;
                }
                write!(f, "\"")
            },
            Self::Char(c) => {
                write!(f, "'")?;
                write_escaped(f, *c, '\'')?;
                write!(f, "'")
            },
            Self::Keyword(k) => write!(f, "{k}"),
            Self::Type(t) => write!(f, "{t}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Pow => write!(f, "^"),
            Self::Assign => write!(f, "="),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Eq => write!(f, "=="),
            Self::NotEq => write!(f, "!="),
            Self::Lt => write!(f, "<"),
            Self::Gt => write!(f, ">"),
            Self::Lte => write!(f, "<="),
            Self::Gte => write!(f, ">="),
            Self::EndOfInput => Ok(()),
        }
    }
}

fn write_escaped(f: &mut std::fmt::Formatter<'_>, ch: char, quote: char) -> std::fmt::Result {
    match ch {
        '\n' => write!(f, "\\n"),
        '\t' => write!(f, "\\t"),
        '\\' => write!(f, "\\\\"),
        c if c == quote => write!(f, "\\{c}"),
        c => write!(f, "{c}"),
    }
}

/// A classified, position-tagged lexical unit.
///
/// Tokens are immutable once created and scoped to a single line; nothing
/// persists across lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The classification, including any literal payload.
    pub kind:  TokenKind,
    /// Where the token starts.
    pub start: Position,
    /// Where the token ends (exclusive).
    pub end:   Position,
}

impl Token {
    /// Creates a token over an explicit span.
    #[must_use]
    pub const fn new(kind: TokenKind, start: Position, end: Position) -> Self {
        Self { kind, start, end }
    }

    /// Returns the literal payload carried by this token, if any.
    ///
    /// Populated only for literal and identifier tokens; operators, keywords,
    /// type names, and the terminator have no payload.
    ///
    /// # Example
    /// ```
    /// use basix::{
    ///     ast::Literal,
    ///     interpreter::lexer::tokenize,
    /// };
    ///
    /// let tokens = tokenize("count").unwrap();
    /// assert_eq!(tokens[0].literal(),
    ///            Some(Literal::IdentifierName("count".to_string())));
    /// ```
    #[must_use]
    pub fn literal(&self) -> Option<Literal> {
        match &self.kind {
            TokenKind::Int(v) => Some(Literal::IntValue(*v)),
            TokenKind::Float(v) => Some(Literal::FloatValue(*v)),
            TokenKind::Bool(v) => Some(Literal::BoolValue(*v)),
            TokenKind::String(s) => Some(Literal::StringValue(s.clone())),
            TokenKind::Char(c) => Some(Literal::CharValue(*c)),
            TokenKind::Identifier(name) => Some(Literal::IdentifierName(name.clone())),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Converts a source line into tokens, or the first lexical error.
///
/// Consumes the whole line: on the first illegal character the accumulated
/// tokens are discarded and only the error is returned, so callers see either
/// all tokens or none. A synthetic [`TokenKind::EndOfInput`] token is
/// appended after the last real token; the parser's top-level loop runs until
/// it reaches it.
///
/// A quoted literal holding exactly one rune is reclassified here from
/// `String` to `Char`; the quote style does not matter, only the unescaped
/// length.
///
/// # Errors
/// - [`ErrorKind::IllegalCharacter`] for any character with no lexer rule.
/// - [`ErrorKind::UnterminatedQuote`] when a quote is never closed, spanning
///   from the opening quote to the end of the line.
/// - [`ErrorKind::Overflow`] for an integer literal that does not fit `i64`.
///
/// # Example
/// ```
/// use basix::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens.len(), 4); // 1, +, 2, end of input
/// assert!(matches!(tokens[3].kind, TokenKind::EndOfInput));
///
/// assert!(tokenize("1 $ 2").is_err());
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = TokenKind::lexer(text);
    let mut tokens = Vec::new();

    while let Some(scanned) = lexer.next() {
        let span = lexer.span();
        let start = Position::locate(text, span.start);
        let end = Position::locate(text, span.end);

        match scanned {
            Ok(TokenKind::String(s)) => {
                let mut runes = s.chars();
                let kind = match (runes.next(), runes.next()) {
                    (Some(c), None) => TokenKind::Char(c),
                    _ => TokenKind::String(s),
                };
                tokens.push(Token::new(kind, start, end));
            },
            Ok(kind) => tokens.push(Token::new(kind, start, end)),
            Err(LexErrorKind::IllegalCharacter) => {
                return Err(Error::new(ErrorKind::IllegalCharacter,
                                      start,
                                      end,
                                      format!("'{}'", lexer.slice())));
            },
            Err(LexErrorKind::UnterminatedQuote) => {
                return Err(Error::new(ErrorKind::UnterminatedQuote,
                                      start,
                                      end,
                                      "missing closing quote"));
            },
            Err(LexErrorKind::IntegerOverflow) => {
                return Err(Error::new(ErrorKind::Overflow,
                                      start,
                                      end,
                                      format!("integer literal '{}' does not fit a 64-bit integer",
                                              lexer.slice())));
            },
        }
    }

    let end = Position::locate(text, text.len());
    tokens.push(Token::new(TokenKind::EndOfInput, end, end));
    Ok(tokens)
}
