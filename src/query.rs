use crate::{
    ast::Function,
    error::Result,
    lexer::tokenize,
    parser::{declaration, parse_source},
    token::{TokenType, spell},
};

/// Placeholder declarator name for `ret (params)` queries.
const PLACEHOLDER: &str = "__q__";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub name: Option<String>,
    pub signature: Option<String>,
}

/// Parses `<signature>` or `<name> :: <signature>`.
///
/// The signature is normalised the same way indexed functions are, so
/// `int (int a, int b)` and `int(int,int)` both become `int ( int , int )`.
pub fn parse_query(text: &str) -> Result<Query> {
    let (mut name, sig) = match text.split_once("::") {
        Some((name, sig)) => {
            let name = name.trim();
            ((!name.is_empty()).then(|| name.to_string()), sig.trim())
        }
        None => (None, text.trim()),
    };
    let sig = sig.trim_end_matches(';').trim_end();
    if sig.is_empty() {
        return Ok(Query {
            name,
            signature: None,
        });
    }

    if !(sig.contains('(') && sig.contains(')')) {
        let tokens = tokenize(sig)?;
        let signature = Some(spell(&tokens)).filter(|s| !s.is_empty());
        return Ok(Query { name, signature });
    }

    let decl = fake_declaration(sig)?;
    let funcs = parse_source("<query>", &decl)?;
    let signature = match funcs.into_iter().next() {
        Some(func) => {
            if func.name != PLACEHOLDER && name.is_none() {
                name = Some(func.name.clone());
            }
            func.signature()
        }
        // not a function declarator; compare its tokens as written
        None => spell(&tokenize(sig)?),
    };
    Ok(Query {
        name,
        signature: Some(signature),
    })
}

/// Turns `ret (params)` into `ret __q__ (params);`; named prototypes such as
/// `int foo(int)` are kept as they are.
fn fake_declaration(sig: &str) -> Result<String> {
    let tokens = tokenize(sig)?;
    if let Some(lparen) = tokens.iter().position(|t| t.is(TokenType::LPAREN)) {
        let named = lparen > 0 && declaration("<query>", &tokens)?.is_some();
        if !named {
            let ret = spell(&tokens[..lparen]);
            let rest = spell(&tokens[lparen..]);
            return Ok(format!("{ret} {PLACEHOLDER} {rest};"));
        }
    }
    Ok(format!("{sig};"))
}

/// Edit distance over ASCII-lowercased bytes.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = a.to_ascii_lowercase().into_bytes();
    let b = b.to_ascii_lowercase().into_bytes();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0; b.len() + 1];
    for i in 1..=a.len() {
        cur[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            cur[j] = (cur[j - 1] + 1).min(prev[j] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

/// Lower is closer. Parts of the query that are absent add nothing.
pub fn score(func: &Function, query: &Query) -> usize {
    let mut score = 0;
    if let Some(name) = &query.name {
        score += levenshtein(&func.name, name);
    }
    if let Some(signature) = &query.signature {
        score += levenshtein(&func.signature(), signature);
    }
    score
}

/// The `top` closest functions, ties broken by name, file, line, column.
pub fn rank<'f>(candidates: &[&'f Function], query: &Query, top: usize) -> Vec<&'f Function> {
    let mut scored: Vec<(usize, &'f Function)> =
        candidates.iter().map(|f| (score(f, query), *f)).collect();
    scored.sort_by(|(sa, fa), (sb, fb)| {
        sa.cmp(sb)
            .then_with(|| fa.name.to_lowercase().cmp(&fb.name.to_lowercase()))
            .then_with(|| {
                fa.location
                    .file
                    .to_lowercase()
                    .cmp(&fb.location.file.to_lowercase())
            })
            .then_with(|| fa.location.line.cmp(&fb.location.line))
            .then_with(|| fa.location.column.cmp(&fb.location.column))
    });
    log::debug!("ranked {} candidates", scored.len());
    scored.into_iter().take(top).map(|(_, f)| f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Location, Param};

    fn function(name: &str, line: usize) -> Function {
        Function {
            name: name.to_string(),
            location: Location {
                file: "a.c".to_string(),
                line,
                column: 1,
            },
            return_type: "int".to_string(),
            params: vec![
                Param {
                    ty: "int".to_string(),
                    name: Some("x".to_string()),
                },
                Param {
                    ty: "int".to_string(),
                    name: Some("y".to_string()),
                },
            ],
            is_variadic: false,
            is_static: false,
        }
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("Foo", "foo"), 0);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_parse_query_signature_only() {
        let query = parse_query("int (int, int)").unwrap();
        assert_eq!(query.name, None);
        assert_eq!(query.signature.as_deref(), Some("int ( int , int )"));

        let query = parse_query("int(int a,int b);").unwrap();
        assert_eq!(query.signature.as_deref(), Some("int ( int , int )"));
    }

    #[test]
    fn test_parse_query_with_name() {
        let query = parse_query("foo :: void * (void *, const void *, size_t)").unwrap();
        assert_eq!(query.name.as_deref(), Some("foo"));
        assert_eq!(
            query.signature.as_deref(),
            Some("void * ( void * , const void * , size_t )")
        );
    }

    #[test]
    fn test_parse_query_with_name_and_empty_signature() {
        let query = parse_query("foo ::   ").unwrap();
        assert_eq!(query.name.as_deref(), Some("foo"));
        assert_eq!(query.signature, None);

        assert_eq!(parse_query("").unwrap(), Query::default());
    }

    #[test]
    fn test_parse_query_named_prototype() {
        let query = parse_query("int foo(int)").unwrap();
        assert_eq!(query.name.as_deref(), Some("foo"));
        assert_eq!(query.signature.as_deref(), Some("int ( int )"));

        let query = parse_query("bar :: int foo(int)").unwrap();
        assert_eq!(query.name.as_deref(), Some("bar"));
    }

    #[test]
    fn test_parse_query_function_pointer() {
        let query = parse_query("int (int (*)(int, int), int, int)").unwrap();
        assert_eq!(
            query.signature.as_deref(),
            Some("int ( int ( * ) ( int , int ) , int , int )")
        );
    }

    #[test]
    fn test_parse_query_qualified_typedef() {
        let query = parse_query("void (const size_t)").unwrap();
        assert_eq!(query.signature.as_deref(), Some("void ( const size_t )"));
    }

    #[test]
    fn test_parse_query_plain_tokens() {
        let query = parse_query("unsigned   long").unwrap();
        assert_eq!(query.signature.as_deref(), Some("unsigned long"));
    }

    #[test]
    fn test_score_combines_name_and_signature() {
        let add = function("add", 1);
        let query = Query {
            name: Some("add".to_string()),
            signature: Some("int ( int , int )".to_string()),
        };
        assert_eq!(score(&add, &query), 0);

        let query = Query {
            name: Some("sub".to_string()),
            signature: Some("int ( int )".to_string()),
        };
        assert_eq!(score(&add, &query), 3 + 6);
        assert_eq!(score(&add, &Query::default()), 0);
    }

    #[test]
    fn test_rank_is_stable_top_n() {
        let subtract = function("subtract", 20);
        let add = function("add", 10);
        let query = Query {
            name: Some("add".to_string()),
            signature: Some("int ( int , int )".to_string()),
        };
        let candidates = vec![&subtract, &add];

        let top1 = rank(&candidates, &query, 1);
        assert_eq!(top1.len(), 1);
        assert_eq!(top1[0].name, "add");
        assert_eq!(rank(&candidates, &query, 1)[0].name, top1[0].name);
        assert!(rank(&candidates, &query, 0).is_empty());
    }

    #[test]
    fn test_rank_ties_by_name_then_line() {
        let b = function("B", 1);
        let a2 = function("a", 7);
        let a1 = function("a", 3);
        let ranked = rank(&[&b, &a2, &a1], &Query::default(), 10);
        let order: Vec<(&str, usize)> = ranked
            .iter()
            .map(|f| (f.name.as_str(), f.location.line))
            .collect();
        assert_eq!(order, vec![("a", 3), ("a", 7), ("B", 1)]);
    }
}
