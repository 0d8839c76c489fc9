use serde::Serialize;

use std::fmt;

use crate::diagnostics::{Diagnostic, DiagnosticSink, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenType {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Literal<'src> {
    None,
    Number(f64),
    Str(&'src str),
}

impl<'src> fmt::Display for Literal<'src> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::None => write!(f, "nil"),
            Literal::Number(n) => write!(f, "{:?}", n),
            Literal::Str(s) => write!(f, "{}", s),
        }
    }
}

/// A classified unit of source text. `lexeme` borrows from the scanned buffer; `line` and
/// `col` locate it for diagnostics further down the pipeline.
///
/// `line` is the line the lexeme ends on. `col` is the column of its first character, counted on
/// the line it starts on, so the two only disagree for strings that span lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token<'src> {
    pub ty: TokenType,
    pub lexeme: &'src str,
    pub literal: Literal<'src>,
    pub line: usize,
    pub col: usize,
}

impl<'src> fmt::Display for Token<'src> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} {} {}", self.ty, self.lexeme, self.literal)
    }
}

/// The output of a scan with the diagnostics gathered along the way.
#[derive(Debug)]
pub struct Scanned<'src> {
    pub tokens: Vec<Token<'src>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'src> Scanned<'src> {
    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn into_result(self) -> Result<Vec<Token<'src>>, Vec<Diagnostic>> {
        if self.diagnostics.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.diagnostics)
        }
    }
}

pub fn scan_tokens(source: &str) -> Scanned<'_> {
    let mut diagnostics = Vec::new();
    let tokens = scan_tokens_with(source, &mut diagnostics);
    Scanned {
        tokens,
        diagnostics,
    }
}

/// Scans all of `source`, reporting malformed lexemes to `sink`. The returned sequence always
/// ends with a single `Eof` token.
pub fn scan_tokens_with<'src, S>(source: &'src str, sink: &mut S) -> Vec<Token<'src>>
where
    S: DiagnosticSink + ?Sized,
{
    let mut scanner = Scanner {
        source,
        sink,
        tokens: Vec::new(),
        start: 0,
        start_col: 1,
        current: 0,
        line: 1,
        col: 1,
    };

    scanner.scan_tokens();

    scanner.tokens
}

pub fn keyword(text: &str) -> Option<TokenType> {
    match text {
        "and" => Some(TokenType::And),
        "class" => Some(TokenType::Class),
        "else" => Some(TokenType::Else),
        "false" => Some(TokenType::False),
        "for" => Some(TokenType::For),
        "fun" => Some(TokenType::Fun),
        "if" => Some(TokenType::If),
        "nil" => Some(TokenType::Nil),
        "or" => Some(TokenType::Or),
        "print" => Some(TokenType::Print),
        "return" => Some(TokenType::Return),
        "super" => Some(TokenType::Super),
        "this" => Some(TokenType::This),
        "true" => Some(TokenType::True),
        "var" => Some(TokenType::Var),
        "while" => Some(TokenType::While),
        _ => None,
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}

struct Scanner<'src, 'sink, S: DiagnosticSink + ?Sized> {
    source: &'src str,
    sink: &'sink mut S,
    tokens: Vec<Token<'src>>,
    // byte offsets into source
    start: usize,
    current: usize,
    start_col: usize,
    line: usize,
    col: usize,
}

impl<'src, 'sink, S: DiagnosticSink + ?Sized> Scanner<'src, 'sink, S> {
    fn scan_tokens(&mut self) {
        while !self.done() {
            self.start = self.current;
            self.start_col = self.col;
            self.scan_token();
        }

        let source = self.source;
        self.tokens.push(Token {
            ty: TokenType::Eof,
            lexeme: &source[source.len()..],
            literal: Literal::None,
            line: self.line,
            col: self.col,
        })
    }

    fn scan_token(&mut self) {
        let c = match self.advance() {
            Some(c) => c,
            None => return,
        };

        match c {
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),
            ',' => self.add_token(TokenType::Comma),
            '.' => self.add_token(TokenType::Dot),
            '-' => self.add_token(TokenType::Minus),
            '+' => self.add_token(TokenType::Plus),
            ';' => self.add_token(TokenType::Semicolon),
            '*' => self.add_token(TokenType::Star),
            '!' => {
                let ty = if self.matches('=') {
                    TokenType::BangEqual
                } else {
                    TokenType::Bang
                };
                self.add_token(ty)
            }
            '=' => {
                let ty = if self.matches('=') {
                    TokenType::EqualEqual
                } else {
                    TokenType::Equal
                };
                self.add_token(ty)
            }
            '<' => {
                let ty = if self.matches('=') {
                    TokenType::LessEqual
                } else {
                    TokenType::Less
                };
                self.add_token(ty)
            }
            '>' => {
                let ty = if self.matches('=') {
                    TokenType::GreaterEqual
                } else {
                    TokenType::Greater
                };
                self.add_token(ty)
            }
            '/' => {
                if self.matches('/') {
                    while !matches!(self.peek(), Some('\n') | None) {
                        self.advance();
                    }
                } else if self.matches('*') {
                    self.block_comment()
                } else {
                    self.add_token(TokenType::Slash)
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.newline(),
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if is_alpha(c) => self.identifier(),
            ch => self.error(self.start_col, ErrorKind::UnexpectedCharacter { ch }),
        }
    }

    fn block_comment(&mut self) {
        let mut depth = 1;

        while depth > 0 {
            match (self.peek(), self.peek_next()) {
                (None, _) => {
                    self.error(self.col, ErrorKind::UnterminatedComment);
                    return;
                }
                (Some('/'), Some('*')) => {
                    self.advance();
                    self.advance();
                    depth += 1;
                }
                (Some('*'), Some('/')) => {
                    self.advance();
                    self.advance();
                    depth -= 1;
                }
                (Some('\n'), _) => {
                    self.advance();
                    self.newline();
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    fn string(&mut self) {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            self.advance();
            if c == '\n' {
                self.newline();
            }
        }

        if self.done() {
            self.error(self.col, ErrorKind::UnterminatedString);
            return;
        }

        // closing quote
        self.advance();

        let source = self.source;
        let value = &source[self.start + 1..self.current - 1];
        self.add_token_literal(TokenType::String, Literal::Str(value));
    }

    fn number(&mut self) {
        self.digits();

        if self.peek() == Some('.') && self.peek_next().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
            self.digits();
        }

        let value: f64 = self.lexeme().parse().unwrap_or_default();
        self.add_token_literal(TokenType::Number, Literal::Number(value));
    }

    fn digits(&mut self) {
        while self.peek().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn identifier(&mut self) {
        while self.peek().map_or(false, is_alpha_numeric) {
            self.advance();
        }

        let ty = keyword(self.lexeme()).unwrap_or(TokenType::Identifier);
        self.add_token(ty)
    }

    fn error(&mut self, col: usize, kind: ErrorKind) {
        self.sink.report(Diagnostic {
            line: self.line,
            col,
            kind,
        })
    }

    fn newline(&mut self) {
        self.line += 1;
        self.col = 1;
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        self.col += 1;
        Some(c)
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            return true;
        }
        false
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    fn lexeme(&self) -> &'src str {
        let source = self.source;
        &source[self.start..self.current]
    }

    fn add_token(&mut self, ty: TokenType) {
        self.add_token_literal(ty, Literal::None)
    }

    fn add_token_literal(&mut self, ty: TokenType, literal: Literal<'src>) {
        let lexeme = self.lexeme();

        self.tokens.push(Token {
            ty,
            lexeme,
            literal,
            line: self.line,
            col: self.start_col,
        })
    }

    fn done(&self) -> bool {
        self.current >= self.source.len()
    }
}
