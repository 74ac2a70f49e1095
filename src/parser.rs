use crate::{
    ast::{Function, Location, Param},
    error::{CsigError, Result},
    lexer::Lexer,
    token::{Token, TokenType, spell},
};

/// Collects the function prototypes and definitions of one C translation
/// unit. Bodies, typedefs, aggregate definitions and variables are skipped.
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    file: String,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>, file: &str) -> Self {
        Self {
            lexer,
            file: file.to_string(),
            tokens: Vec::new(),
            pos: 0,
        }
    }

    fn fill(&mut self) -> Result<()> {
        loop {
            self.lexer.next_token()?;
            let tok = self.lexer.curr_tok();
            if tok.is(TokenType::EOF) {
                return Ok(());
            }
            self.tokens.push(tok);
        }
    }

    pub fn parse(&mut self) -> Result<Vec<Function>> {
        self.fill()?;
        let mut funcs = Vec::new();
        let mut item: Vec<Token> = Vec::new();
        let mut linkage_blocks = 0usize;

        while self.pos < self.tokens.len() {
            let tok = self.tokens[self.pos].clone();
            match tok.token {
                TokenType::SEMI => {
                    if let Some(func) = declaration(&self.file, &item)? {
                        funcs.push(func);
                    }
                    item.clear();
                    self.pos += 1;
                }
                TokenType::LBRACE => {
                    if is_linkage_spec(&item) {
                        linkage_blocks += 1;
                        item.clear();
                        self.pos += 1;
                    } else if item.last().is_some_and(|t| t.is(TokenType::RPAREN)) {
                        if let Some(func) = declaration(&self.file, &item)? {
                            funcs.push(func);
                        }
                        item.clear();
                        self.skip_block()?;
                    } else {
                        // aggregate body: the declaration continues up to `;`
                        self.skip_block()?;
                    }
                }
                TokenType::RBRACE if linkage_blocks > 0 && item.is_empty() => {
                    linkage_blocks -= 1;
                    self.pos += 1;
                }
                TokenType::RBRACE => {
                    return Err(CsigError::parse("unmatched '}'", tok.row, tok.col));
                }
                _ => {
                    item.push(tok);
                    self.pos += 1;
                }
            }
        }

        if let Some(tok) = item.first() {
            return Err(CsigError::parse(
                "expected ';' before end of input",
                tok.row,
                tok.col,
            ));
        }
        log::debug!("{}: {} functions", self.file, funcs.len());
        Ok(funcs)
    }

    fn skip_block(&mut self) -> Result<()> {
        let open = self.tokens[self.pos].clone();
        let mut depth = 0usize;
        while self.pos < self.tokens.len() {
            match self.tokens[self.pos].token {
                TokenType::LBRACE => depth += 1,
                TokenType::RBRACE => {
                    depth -= 1;
                    if depth == 0 {
                        self.pos += 1;
                        return Ok(());
                    }
                }
                _ => {}
            }
            self.pos += 1;
        }
        Err(CsigError::parse("unterminated '{'", open.row, open.col))
    }
}

/// Builds a [`Function`] when `item` declares one, `None` otherwise.
pub fn declaration(file: &str, item: &[Token]) -> Result<Option<Function>> {
    let item = &strip_attributes(item);
    if item.is_empty() || item[0].is_ident() && item[0].text == "typedef" {
        return Ok(None);
    }
    let Some(lparen) = item.iter().position(|t| t.is(TokenType::LPAREN)) else {
        return Ok(None);
    };
    if lparen < 1 {
        return Ok(None);
    }
    let name = &item[lparen - 1];
    if !name.is_ident() || name.is_keyword() {
        return Ok(None);
    }
    let prefix = &item[..lparen - 1];
    if !prefix
        .iter()
        .all(|t| t.is(TokenType::IDENT) || t.is(TokenType::STAR))
    {
        return Ok(None);
    }
    let rparen = matching_paren(item, lparen)
        .ok_or_else(|| CsigError::parse("unbalanced '('", item[lparen].row, item[lparen].col))?;

    let is_static = prefix.iter().any(|t| t.is_ident() && t.text == "static");
    let ret: Vec<Token> = prefix
        .iter()
        .filter(|t| !t.is_storage_class())
        .cloned()
        .collect();
    let return_type = if ret.is_empty() {
        "int".to_string()
    } else {
        spell(&ret)
    };

    let mut params = Vec::new();
    let mut is_variadic = false;
    let inner = &item[lparen + 1..rparen];
    let is_void = inner.len() == 1 && inner[0].is_ident() && inner[0].text == "void";
    if !inner.is_empty() && !is_void {
        for part in split_params(inner) {
            match part {
                [] => {
                    let at = &item[rparen];
                    return Err(CsigError::parse("empty parameter", at.row, at.col));
                }
                [tok] if tok.is(TokenType::ELLIPSIS) => is_variadic = true,
                tokens => params.push(param(tokens)),
            }
        }
    }

    Ok(Some(Function {
        name: name.text.clone(),
        location: Location {
            file: file.to_string(),
            line: name.row,
            column: name.col,
        },
        return_type,
        params,
        is_variadic,
        is_static,
    }))
}

/// Drops `__attribute__((...))`, `__declspec(...)` and `__asm__(...)`
/// groups, which carry no part of the signature.
fn strip_attributes(item: &[Token]) -> Vec<Token> {
    let mut kept = Vec::with_capacity(item.len());
    let mut i = 0;
    while i < item.len() {
        let tok = &item[i];
        let is_attribute = tok.is_ident()
            && matches!(
                tok.text.as_str(),
                "__attribute__" | "__attribute" | "__declspec" | "__asm__" | "__asm"
            )
            && item.get(i + 1).is_some_and(|t| t.is(TokenType::LPAREN));
        if is_attribute {
            if let Some(close) = matching_paren(item, i + 1) {
                i = close + 1;
                continue;
            }
        }
        kept.push(tok.clone());
        i += 1;
    }
    kept
}

/// `extern "C" {` opens a block whose declarations are still top level.
fn is_linkage_spec(item: &[Token]) -> bool {
    matches!(item, [ext, lang] if ext.is_ident() && ext.text == "extern" && lang.is(TokenType::STRING))
}

fn matching_paren(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, tok) in tokens.iter().enumerate().skip(open) {
        match tok.token {
            TokenType::LPAREN => depth += 1,
            TokenType::RPAREN => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn split_params(tokens: &[Token]) -> Vec<&[Token]> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, tok) in tokens.iter().enumerate() {
        match tok.token {
            TokenType::LPAREN | TokenType::LBRACKET => depth += 1,
            TokenType::RPAREN | TokenType::RBRACKET => depth = depth.saturating_sub(1),
            TokenType::COMMA if depth == 0 => {
                parts.push(&tokens[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&tokens[start..]);
    parts
}

/// Splits a parameter declaration into its type and optional name.
///
/// The name is the first non-keyword identifier that follows a type token
/// and ends the declarator: `int a`, `int arr[]`, `int (*func)(int, int)`.
/// Qualifiers alone do not make a type, so in `const size_t` the identifier
/// is the type.
fn param(tokens: &[Token]) -> Param {
    let name_at = (1..tokens.len()).find(|&i| {
        let tok = &tokens[i];
        let prev = &tokens[i - 1];
        let typed = tokens[..i]
            .iter()
            .any(|t| t.is_ident() && !t.is_qualifier() && !t.is_tag_keyword());
        let ends = tokens
            .get(i + 1)
            .is_none_or(|next| next.is(TokenType::LBRACKET) || next.is(TokenType::RPAREN));
        tok.is_ident()
            && !tok.is_keyword()
            && (prev.is_ident() || prev.is(TokenType::STAR))
            && !prev.is_tag_keyword()
            && typed
            && ends
    });

    match name_at {
        Some(i) => {
            let ty: Vec<Token> = tokens
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, t)| t.clone())
                .collect();
            Param {
                ty: spell(&ty),
                name: Some(tokens[i].text.clone()),
            }
        }
        None => Param {
            ty: spell(tokens),
            name: None,
        },
    }
}

/// Parses `src` as the contents of `file`.
pub fn parse_source(file: &str, src: &str) -> Result<Vec<Function>> {
    Parser::new(Lexer::new(src), file).parse()
}
