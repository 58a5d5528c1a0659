use crate::{error::SqlError, query::SqlQuery};
use interpreter::Target;

/// The relational target: conditions become WHERE predicates and joins.
pub struct Sql;

impl Target for Sql {
    type Accumulator<'a> = SqlQuery;
    type Services = ();
    type Error = SqlError;
}
