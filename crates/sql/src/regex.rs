//! Regex predicates differ per database; clients without an entry here
//! cannot run the `regex` operator.

use crate::{config::Client, error::SqlError};
use lazy_static::lazy_static;
use std::collections::HashMap;

type TemplateFn = fn(bool) -> &'static str;

lazy_static! {
    static ref REGEX_TEMPLATES: HashMap<Client, TemplateFn> = {
        let mut m: HashMap<Client, TemplateFn> = HashMap::new();
        m.insert(Client::Pg, posix_regex);
        m.insert(Client::Oracle, posix_regex);
        m.insert(Client::MySql, regexp);
        m
    };
}

fn posix_regex(ignore_case: bool) -> &'static str {
    if ignore_case {
        "{field} ~* {pattern}"
    } else {
        "{field} ~ {pattern}"
    }
}

fn regexp(_ignore_case: bool) -> &'static str {
    "{field} REGEXP {pattern} = 1"
}

/// Returns the predicate template for `client`, with `{field}` and
/// `{pattern}` placeholders.
pub fn regex_template(client: Client, ignore_case: bool) -> Result<&'static str, SqlError> {
    REGEX_TEMPLATES
        .get(&client)
        .map(|template| template(ignore_case))
        .ok_or_else(|| SqlError::UnsupportedTarget {
            operator: "regex".to_string(),
            client,
        })
}
