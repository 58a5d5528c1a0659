//! Defines the `Dialect` trait for database-specific SQL syntax.

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - PostgreSQL uses double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for a parameterized query.
    ///
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - MySQL uses `?`
    fn get_placeholder(&self, index: usize) -> String;

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> String;

    /// Text placed between a table and its alias.
    fn alias_keyword(&self) -> &'static str {
        " AS "
    }
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn get_placeholder(&self, index: usize) -> String {
        // PostgreSQL uses $1, $2, etc.
        format!("${}", index + 1)
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn get_placeholder(&self, _index: usize) -> String {
        // MySQL uses ?
        "?".into()
    }

    fn name(&self) -> String {
        "MySQL".into()
    }
}

#[derive(Debug, Clone)]
pub struct Oracle;

impl Dialect for Oracle {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn get_placeholder(&self, index: usize) -> String {
        format!(":{}", index + 1)
    }

    fn name(&self) -> String {
        "Oracle".into()
    }

    // Oracle rejects `AS` in table aliases.
    fn alias_keyword(&self) -> &'static str {
        " "
    }
}

#[derive(Debug, Clone)]
pub struct MsSql;

impl Dialect for MsSql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("[{}]", ident.replace(']', "]]"))
    }

    fn get_placeholder(&self, index: usize) -> String {
        format!("@p{}", index + 1)
    }

    fn name(&self) -> String {
        "SQL Server".into()
    }
}

#[derive(Debug, Clone)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn get_placeholder(&self, _index: usize) -> String {
        "?".into()
    }

    fn name(&self) -> String {
        "SQLite".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoting() {
        assert_eq!(Postgres.quote_identifier("users"), r#""users""#);
        assert_eq!(MySql.quote_identifier("users"), "`users`");
        assert_eq!(MsSql.quote_identifier("users"), "[users]");
        assert_eq!(Postgres.quote_identifier(r#"we"ird"#), r#""we""ird""#);
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(Postgres.get_placeholder(0), "$1");
        assert_eq!(MySql.get_placeholder(3), "?");
        assert_eq!(Oracle.get_placeholder(1), ":2");
        assert_eq!(MsSql.get_placeholder(0), "@p1");
        assert_eq!(Sqlite.get_placeholder(9), "?");
    }

    #[test]
    fn test_alias_keyword() {
        assert_eq!(Postgres.alias_keyword(), " AS ");
        assert_eq!(Oracle.alias_keyword(), " ");
    }
}
