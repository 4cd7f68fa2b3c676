//! Named-parameter query rewriting.
//!
//! The server only understands positional parameters, so `$name` placeholders
//! written by applications are rewritten to `?` markers before the statement
//! is prepared. The scan runs once per prepared statement, entirely in
//! memory, and records the left-to-right order of names so that binding code
//! can resolve application-supplied arguments by name without re-reading the
//! query text.
#![forbid(unsafe_code)]

use std::collections::HashMap;

use tracing::debug;

use crate::error::{DriverError, Result};
use crate::query::lexer;

/// Outcome of rewriting one query: positional SQL plus the ordered parameter
/// names behind each `?` marker.
///
/// The same name may occur more than once; every occurrence is its own
/// binding slot. The k-th `?` in [`RewrittenQuery::sql`] always corresponds
/// to the k-th entry of [`RewrittenQuery::parameter_names`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenQuery {
    sql: String,
    names: Vec<String>,
}

impl RewrittenQuery {
    /// The rewritten query text with `?` positional markers.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Parameter names in placeholder order.
    pub fn parameter_names(&self) -> &[String] {
        &self.names
    }

    /// Number of positional slots in the rewritten text.
    pub fn parameter_count(&self) -> usize {
        self.names.len()
    }

    /// 1-based positional slots occupied by `name`, in order.
    ///
    /// Empty when the query never mentions the name.
    pub fn ordinals(&self, name: &str) -> Vec<usize> {
        self.names
            .iter()
            .enumerate()
            .filter(|(_, n)| n.as_str() == name)
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Resolves a name-to-value table into the positional value list the
    /// statement layer needs.
    ///
    /// Fails if any parameter in the query has no entry in `values`; extra
    /// entries are ignored.
    pub fn bind<'v, T>(&self, values: &'v HashMap<String, T>) -> Result<Vec<&'v T>> {
        self.names
            .iter()
            .map(|name| {
                values.get(name).ok_or_else(|| {
                    DriverError::InvalidArgument(format!("no value bound for parameter '{name}'"))
                })
            })
            .collect()
    }
}

/// Rewrites `$name` placeholders in `query` to positional `?` markers.
///
/// Quoted literals, quoted identifiers, line and block comments, and
/// dollar-quoted strings are copied verbatim; a `$` inside any of them is
/// data. Malformed or unterminated units never fail the rewrite -- the text
/// degrades to a verbatim copy of the remainder, leaving rejection to the
/// server. The only error is an empty input.
pub fn rewrite(query: &str) -> Result<RewrittenQuery> {
    if query.is_empty() {
        return Err(DriverError::InvalidArgument(
            "query text must not be empty".into(),
        ));
    }

    let sql = query.as_bytes();
    let mut out = String::with_capacity(query.len());
    let mut names: Vec<String> = Vec::new();
    // Start of the pending verbatim run. Only a parameter interrupts it;
    // quoted and commented units are verbatim anyway.
    let mut plain = 0;
    let mut i = 0;
    while i < sql.len() {
        let unit_end = match sql[i] {
            b'\'' => lexer::skip_quoted(sql, i, b'\''),
            b'"' => lexer::skip_quoted(sql, i, b'"'),
            b'-' if sql.get(i + 1) == Some(&b'-') => lexer::skip_line_comment(sql, i),
            b'/' if sql.get(i + 1) == Some(&b'*') => lexer::skip_block_comment(sql, i),
            b'$' => {
                if let Some(end) = lexer::skip_dollar_quote(sql, i) {
                    end
                } else if let Some(end) = parameter_end(sql, i) {
                    out.push_str(&query[plain..i]);
                    out.push('?');
                    names.push(query[i + 1..=end].to_owned());
                    plain = end + 1;
                    end
                } else {
                    i
                }
            }
            _ => i,
        };
        i = unit_end + 1;
    }
    out.push_str(&query[plain..]);

    debug!(parameters = names.len(), "rewrote named-parameter query");
    Ok(RewrittenQuery { sql: out, names })
}

/// Index of the last byte of the parameter name opened by the `$` at `start`,
/// or `None` when the `$` is not a parameter marker.
fn parameter_end(sql: &[u8], start: usize) -> Option<usize> {
    if start > 0 && lexer::is_ident_cont(sql[start - 1]) {
        return None;
    }
    if !lexer::is_tag_start(*sql.get(start + 1)?) {
        return None;
    }
    let mut end = start + 1;
    while sql.get(end + 1).is_some_and(|&b| lexer::is_tag_cont(b)) {
        end += 1;
    }
    Some(end)
}
