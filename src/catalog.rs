use serde::{Deserialize, Serialize};

use crate::{
    ast::Function,
    error::Result,
    parser::parse_source,
    query::{Query, rank},
};

/// Indexed functions, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    functions: Vec<Function>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of the C surface exported by `csig_std`.
    pub fn builtin() -> Result<Self> {
        let mut catalog = Self::new();
        catalog.index(csig_std::C_HEADER_NAME, csig_std::C_HEADER)?;
        Ok(catalog)
    }

    /// Adds every function declared in `src`, replacing anything previously
    /// indexed from `file`.
    pub fn index(&mut self, file: &str, src: &str) -> Result<usize> {
        let funcs = parse_source(file, src)?;
        let count = funcs.len();
        self.functions.retain(|f| f.location.file != file);
        self.functions.extend(funcs);
        log::debug!("indexed {count} functions from {file}");
        Ok(count)
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Functions whose name or normalised signature contains the matching
    /// part of the query, ignoring case. Falls back to every function when
    /// nothing matches.
    pub fn candidates(&self, query: &Query) -> Vec<&Function> {
        let name = query.name.as_deref().map(str::to_lowercase);
        let signature = query.signature.as_deref().map(str::to_lowercase);
        if name.is_none() && signature.is_none() {
            return self.functions.iter().collect();
        }

        let matched: Vec<&Function> = self
            .functions
            .iter()
            .filter(|f| {
                name.as_ref()
                    .is_some_and(|n| f.name.to_lowercase().contains(n.as_str()))
                    || signature
                        .as_ref()
                        .is_some_and(|s| f.signature().to_lowercase().contains(s.as_str()))
            })
            .collect();
        if matched.is_empty() {
            self.functions.iter().collect()
        } else {
            matched
        }
    }

    pub fn search(&self, query: &Query, top: usize) -> Vec<&Function> {
        rank(&self.candidates(query), query, top)
    }
}
