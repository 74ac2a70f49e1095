use std::{iter::Peekable, str::Chars};

use crate::{
    error::LexerError,
    token::{Token, TokenType},
};

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    tok: Token,
    src: Peekable<Chars<'a>>,
    row: usize,
    col: usize,
    line_start: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Lexer {
            tok: Token {
                token: TokenType::EOF,
                text: String::new(),
                row: 1,
                col: 1,
            },
            src: src.chars().peekable(),
            row: 1,
            col: 1,
            line_start: true,
        }
    }

    fn current(&mut self) -> char {
        *self.src.peek().unwrap_or(&'\0')
    }

    fn bump(&mut self) -> char {
        let ch = self.src.next().unwrap_or('\0');
        if ch == '\n' {
            self.row += 1;
            self.col = 1;
            self.line_start = true;
        } else {
            self.col += 1;
        }
        ch
    }

    fn at_end(&mut self) -> bool {
        self.src.peek().is_none()
    }

    fn lookahead(&self) -> char {
        let mut ahead = self.src.clone();
        ahead.next();
        ahead.next().unwrap_or('\0')
    }

    /// Skips whitespace, comments and preprocessor lines.
    fn skip_trivia(&mut self) -> Result<(), LexerError> {
        loop {
            let ch = self.current();
            if self.at_end() {
                return Ok(());
            }
            if ch.is_whitespace() {
                self.bump();
            } else if ch == '#' && self.line_start {
                self.skip_directive();
            } else if ch == '/' && self.lookahead() == '/' {
                while !self.at_end() && self.current() != '\n' {
                    self.bump();
                }
            } else if ch == '/' && self.lookahead() == '*' {
                let (row, col) = (self.row, self.col);
                self.bump();
                self.bump();
                loop {
                    if self.at_end() {
                        return Err(LexerError::UnterminatedComment { row, col });
                    }
                    if self.bump() == '*' && self.current() == '/' {
                        self.bump();
                        break;
                    }
                }
            } else {
                return Ok(());
            }
        }
    }

    /// A directive runs to the end of the line, continued by a trailing `\`.
    fn skip_directive(&mut self) {
        while !self.at_end() {
            let ch = self.bump();
            if ch == '\\' && self.current() == '\n' {
                self.bump();
            } else if self.current() == '\n' {
                break;
            }
        }
    }

    fn parse_ident(&mut self) -> String {
        let mut ident = String::new();
        while self.current().is_alphanumeric() || self.current() == '_' {
            ident.push(self.bump());
        }
        ident
    }

    fn parse_number(&mut self) -> String {
        let mut number = String::new();
        while self.current().is_alphanumeric() || self.current() == '.' {
            number.push(self.bump());
        }
        number
    }

    fn parse_quoted(&mut self, quote: char) -> Result<String, LexerError> {
        let (row, col) = (self.row, self.col);
        let mut text = String::new();
        text.push(self.bump());
        loop {
            if self.at_end() || self.current() == '\n' {
                return Err(LexerError::UnterminatedLiteral { row, col });
            }
            let ch = self.bump();
            text.push(ch);
            if ch == '\\' {
                text.push(self.bump());
            } else if ch == quote {
                return Ok(text);
            }
        }
    }

    fn single(&mut self, token: TokenType) {
        let ch = self.bump();
        self.tok.token = token;
        self.tok.text = ch.to_string();
    }

    pub fn next_token(&mut self) -> Result<(), LexerError> {
        self.skip_trivia()?;
        self.tok.row = self.row;
        self.tok.col = self.col;
        if self.at_end() {
            self.tok.token = TokenType::EOF;
            self.tok.text.clear();
            return Ok(());
        }
        self.line_start = false;

        let ch = self.current();
        if ch.is_alphabetic() || ch == '_' {
            self.tok.text = self.parse_ident();
            self.tok.token = TokenType::IDENT;
        } else if ch.is_ascii_digit() {
            self.tok.text = self.parse_number();
            self.tok.token = TokenType::NUMBER;
        } else if ch == '"' {
            self.tok.text = self.parse_quoted('"')?;
            self.tok.token = TokenType::STRING;
        } else if ch == '\'' {
            self.tok.text = self.parse_quoted('\'')?;
            self.tok.token = TokenType::CHAR;
        } else if ch == '.' && self.lookahead() == '.' {
            let (row, col) = (self.row, self.col);
            for _ in 0..3 {
                if self.current() != '.' {
                    return Err(LexerError::UnexpectedChar {
                        found: self.current(),
                        row,
                        col,
                    });
                }
                self.bump();
            }
            self.tok.token = TokenType::ELLIPSIS;
            self.tok.text = "...".to_string();
        } else if ch == ':' && self.lookahead() == ':' {
            self.bump();
            self.bump();
            self.tok.token = TokenType::PATHSEP;
            self.tok.text = "::".to_string();
        } else {
            match ch {
                '(' => self.single(TokenType::LPAREN),
                ')' => self.single(TokenType::RPAREN),
                '{' => self.single(TokenType::LBRACE),
                '}' => self.single(TokenType::RBRACE),
                '[' => self.single(TokenType::LBRACKET),
                ']' => self.single(TokenType::RBRACKET),
                ',' => self.single(TokenType::COMMA),
                ';' => self.single(TokenType::SEMI),
                '*' => self.single(TokenType::STAR),
                '&' => self.single(TokenType::AMP),
                c if c.is_ascii_punctuation() => self.single(TokenType::PUNCT),
                found => {
                    return Err(LexerError::UnexpectedChar {
                        found,
                        row: self.row,
                        col: self.col,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn curr_tok(&self) -> Token {
        self.tok.clone()
    }
}

/// Every token of `src`, without the trailing EOF.
pub fn tokenize(src: &str) -> Result<Vec<Token>, LexerError> {
    let mut lexer = Lexer::new(src);
    let mut tokens = Vec::new();
    loop {
        lexer.next_token()?;
        let tok = lexer.curr_tok();
        if tok.is(TokenType::EOF) {
            return Ok(tokens);
        }
        tokens.push(tok);
    }
}
