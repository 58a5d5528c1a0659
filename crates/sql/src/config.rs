use crate::{error::SqlError, query::SqlQuery, schema::Schema};
use query_builder::dialect::{Dialect, MsSql, MySql, Oracle, Postgres, Sqlite};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::Arc};

/// The database client a query is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Client {
    #[serde(rename = "pg")]
    Pg,
    #[serde(rename = "mysql")]
    MySql,
    #[serde(rename = "oracledb")]
    Oracle,
    #[serde(rename = "mssql")]
    MsSql,
    #[serde(rename = "sqlite3")]
    Sqlite,
}

impl Client {
    pub fn as_str(&self) -> &'static str {
        match self {
            Client::Pg => "pg",
            Client::MySql => "mysql",
            Client::Oracle => "oracledb",
            Client::MsSql => "mssql",
            Client::Sqlite => "sqlite3",
        }
    }

    pub fn dialect(&self) -> &'static dyn Dialect {
        match self {
            Client::Pg => &Postgres,
            Client::MySql => &MySql,
            Client::Oracle => &Oracle,
            Client::MsSql => &MsSql,
            Client::Sqlite => &Sqlite,
        }
    }
}

impl FromStr for Client {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pg" | "postgres" | "postgresql" => Ok(Client::Pg),
            "mysql" | "mysql2" => Ok(Client::MySql),
            "oracledb" => Ok(Client::Oracle),
            "mssql" => Ok(Client::MsSql),
            "sqlite3" => Ok(Client::Sqlite),
            other => Err(SqlError::Config(format!("Unknown client: {other}"))),
        }
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to start building queries: the client and the
/// relation metadata shared by every query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    pub client: Client,
    #[serde(default)]
    pub schema: Arc<Schema>,
}

impl QueryConfig {
    pub fn new(client: Client, schema: Schema) -> Self {
        Self {
            client,
            schema: Arc::new(schema),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SqlError> {
        serde_json::from_str(json).map_err(|e| SqlError::Config(e.to_string()))
    }

    /// Starts an empty query over `table`.
    pub fn query(&self, table: &str) -> SqlQuery {
        SqlQuery::new(Arc::clone(&self.schema), self.client, table)
    }
}
