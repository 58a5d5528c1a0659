use crate::{error::SqlError, query::SqlQuery, target::Sql};
use interpreter::{Context, expect_compound};
use model::Condition;
use query_builder::ast::filter::Connective;

type Ctx<'a> = Context<'a, Sql>;

pub fn and(condition: &Condition, query: SqlQuery, ctx: &Ctx<'_>) -> Result<SqlQuery, SqlError> {
    group(condition, query, ctx, Connective::And, false)
}

pub fn or(condition: &Condition, query: SqlQuery, ctx: &Ctx<'_>) -> Result<SqlQuery, SqlError> {
    group(condition, query, ctx, Connective::Or, false)
}

/// `NOT (a AND b)`; a single compound child keeps its own brackets.
pub fn not(condition: &Condition, query: SqlQuery, ctx: &Ctx<'_>) -> Result<SqlQuery, SqlError> {
    group(condition, query, ctx, Connective::And, true)
}

pub fn nor(condition: &Condition, query: SqlQuery, ctx: &Ctx<'_>) -> Result<SqlQuery, SqlError> {
    group(condition, query, ctx, Connective::Or, true)
}

fn group(
    condition: &Condition,
    query: SqlQuery,
    ctx: &Ctx<'_>,
    connective: Connective,
    negated: bool,
) -> Result<SqlQuery, SqlError> {
    let compound = expect_compound(condition)?;
    query.where_wrapped(connective, negated, |mut query| {
        for child in &compound.children {
            query = ctx.interpret(child, query)?;
        }
        Ok(query)
    })
}
