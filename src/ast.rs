use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub ty: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub location: Location,
    pub return_type: String,
    pub params: Vec<Param>,
    pub is_variadic: bool,
    pub is_static: bool,
}

impl Function {
    /// `ret ( t1 , t2 )` with parameter names dropped, one space between
    /// tokens.
    pub fn signature(&self) -> String {
        let mut parts: Vec<&str> = self.params.iter().map(|p| p.ty.as_str()).collect();
        if self.is_variadic {
            parts.push("...");
        }
        if parts.is_empty() {
            format!("{} ( )", self.return_type)
        } else {
            format!("{} ( {} )", self.return_type, parts.join(" , "))
        }
    }

    /// Human form, `ret(type name, type)`, keeping names where declared.
    pub fn prototype(&self) -> String {
        let mut parts: Vec<String> = self
            .params
            .iter()
            .map(|p| match &p.name {
                Some(name) => format!("{} {}", compact(&p.ty), name),
                None => compact(&p.ty),
            })
            .collect();
        if self.is_variadic {
            parts.push("...".to_string());
        }
        format!("{}({})", compact(&self.return_type), parts.join(", "))
    }
}

/// Rejoins space-separated tokens the way C types are usually written:
/// `int ( * ) ( int , int )` becomes `int (*)(int, int)`.
fn compact(spelled: &str) -> String {
    let mut out = String::with_capacity(spelled.len());
    let mut prev: Option<&str> = None;
    for tok in spelled.split_whitespace() {
        if let Some(p) = prev {
            let glued = matches!(p, "(" | "[")
                || matches!(tok, ")" | "]" | ",")
                || (p == ")" && tok == "(");
            if !glued {
                out.push(' ');
            }
        }
        out.push_str(tok);
        prev = Some(tok);
    }
    out
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} :: {}",
            self.location.file,
            self.location.line,
            self.location.column,
            self.name,
            self.prototype()
        )
    }
}
