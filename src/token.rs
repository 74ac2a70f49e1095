#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenType {
    IDENT,
    NUMBER,
    STRING,
    CHAR,
    LPAREN,
    RPAREN,
    LBRACE,
    RBRACE,
    LBRACKET,
    RBRACKET,
    COMMA,
    SEMI,
    STAR,
    AMP,
    ELLIPSIS,
    PATHSEP,
    PUNCT,
    EOF,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token: TokenType,
    pub text: String,
    pub row: usize,
    pub col: usize,
}

impl Token {
    pub fn is(&self, token: TokenType) -> bool {
        self.token == token
    }

    pub fn is_ident(&self) -> bool {
        self.token == TokenType::IDENT
    }

    pub fn is_keyword(&self) -> bool {
        self.is_ident() && KEYWORDS.contains(&self.text.as_str())
    }

    /// `struct`, `union` or `enum`: the next identifier is a tag, not a name.
    pub fn is_tag_keyword(&self) -> bool {
        self.is_ident() && matches!(self.text.as_str(), "struct" | "union" | "enum")
    }

    /// Qualifiers and storage classes: they never name a type on their own.
    pub fn is_qualifier(&self) -> bool {
        self.is_storage_class()
            || self.is_ident()
                && matches!(
                    self.text.as_str(),
                    "const" | "volatile" | "restrict" | "__restrict" | "__restrict__" | "register"
                        | "auto"
                )
    }

    pub fn is_storage_class(&self) -> bool {
        self.is_ident()
            && matches!(
                self.text.as_str(),
                "static" | "extern" | "inline" | "_Noreturn" | "__inline" | "__inline__"
            )
    }
}

pub const KEYWORDS: &[&str] = &[
    "auto", "char", "const", "double", "enum", "extern", "float", "inline", "int", "long",
    "register", "restrict", "short", "signed", "static", "struct", "typedef", "union",
    "unsigned", "void", "volatile", "_Bool", "_Complex", "_Noreturn", "bool", "__inline",
    "__inline__", "__restrict", "__restrict__",
];

/// Joins token spellings with single spaces, the canonical form compared by
/// searches.
pub fn spell(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
