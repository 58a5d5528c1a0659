use crate::{error::SqlError, query::SqlQuery, regex::regex_template, target::Sql};
use interpreter::{Context, InterpretError, expect_field};
use model::{Condition, FieldCondition, Operand, Value};
use query_builder::ast::expr::{BinaryOperator, Expr};

type Ctx<'a> = Context<'a, Sql>;
type Result<T> = std::result::Result<T, SqlError>;

pub fn eq(condition: &Condition, query: SqlQuery, _: &Ctx<'_>) -> Result<SqlQuery> {
    compare(condition, query, BinaryOperator::Eq, false)
}

/// Rendered as `NOT col = ?`, or `col IS NOT NULL` against `null`.
pub fn ne(condition: &Condition, query: SqlQuery, _: &Ctx<'_>) -> Result<SqlQuery> {
    compare(condition, query, BinaryOperator::Eq, true)
}

pub fn lt(condition: &Condition, query: SqlQuery, _: &Ctx<'_>) -> Result<SqlQuery> {
    compare(condition, query, BinaryOperator::Lt, false)
}

pub fn lte(condition: &Condition, query: SqlQuery, _: &Ctx<'_>) -> Result<SqlQuery> {
    compare(condition, query, BinaryOperator::LtEq, false)
}

pub fn gt(condition: &Condition, query: SqlQuery, _: &Ctx<'_>) -> Result<SqlQuery> {
    compare(condition, query, BinaryOperator::Gt, false)
}

pub fn gte(condition: &Condition, query: SqlQuery, _: &Ctx<'_>) -> Result<SqlQuery> {
    compare(condition, query, BinaryOperator::GtEq, false)
}

pub fn within(condition: &Condition, query: SqlQuery, _: &Ctx<'_>) -> Result<SqlQuery> {
    membership(condition, query, false)
}

pub fn nin(condition: &Condition, query: SqlQuery, _: &Ctx<'_>) -> Result<SqlQuery> {
    membership(condition, query, true)
}

pub fn exists(condition: &Condition, mut query: SqlQuery, _: &Ctx<'_>) -> Result<SqlQuery> {
    let field = expect_field(condition)?;
    let present = operand_value(field)?.is_truthy();
    let column = query.column(&field.field)?;
    Ok(query.where_expr(Expr::is_null(column, present)))
}

/// `[divisor, remainder]` becomes `MOD(col, divisor) = remainder`.
pub fn modulo(condition: &Condition, mut query: SqlQuery, _: &Ctx<'_>) -> Result<SqlQuery> {
    let field = expect_field(condition)?;
    let (divisor, remainder) = match operand_value(field)?.as_array() {
        Some([divisor, remainder]) => match (divisor.as_i64(), remainder.as_i64()) {
            (Some(0), _) | (None, _) | (_, None) => {
                return Err(malformed(field, "[non-zero divisor, remainder] integers").into());
            }
            (Some(divisor), Some(remainder)) => (divisor, remainder),
        },
        _ => return Err(malformed(field, "[divisor, remainder] array").into()),
    };

    let column = query.column(&field.field)?;
    let call = Expr::function("MOD", vec![column, Expr::Value(Value::Int(divisor))]);
    Ok(query.where_expr(Expr::binary(
        call,
        BinaryOperator::Eq,
        Expr::Value(Value::Int(remainder)),
    )))
}

pub fn regex(condition: &Condition, mut query: SqlQuery, _: &Ctx<'_>) -> Result<SqlQuery> {
    let field = expect_field(condition)?;
    let Operand::Pattern(pattern) = &field.value else {
        return Err(malformed(field, "regex pattern").into());
    };
    let template = regex_template(query.client(), pattern.ignore_case)?;

    let column = query.column(&field.field)?;
    Ok(query.where_expr(Expr::Template {
        template: template.to_string(),
        args: vec![
            ("field".to_string(), column),
            (
                "pattern".to_string(),
                Expr::Value(Value::String(pattern.source.clone())),
            ),
        ],
    }))
}

/// Joins the relation named by the field and interprets the nested
/// condition against it. Adds no predicate of its own.
pub fn elem_match(condition: &Condition, query: SqlQuery, ctx: &Ctx<'_>) -> Result<SqlQuery> {
    let field = expect_field(condition)?;
    let Operand::Condition(nested) = &field.value else {
        return Err(malformed(field, "nested condition").into());
    };

    query.prefixed(&field.field, |scoped| ctx.interpret(nested, scoped))
}

fn compare(
    condition: &Condition,
    mut query: SqlQuery,
    op: BinaryOperator,
    negated: bool,
) -> Result<SqlQuery> {
    let field = expect_field(condition)?;
    let value = operand_value(field)?;
    if !value.is_scalar() {
        return Err(malformed(field, "scalar value").into());
    }
    if value.is_null() && op != BinaryOperator::Eq {
        return Err(malformed(field, "non-null scalar").into());
    }

    let column = query.column(&field.field)?;
    // `= NULL` never matches, so null equality becomes `IS [NOT] NULL`.
    if value.is_null() {
        return Ok(query.where_expr(Expr::is_null(column, negated)));
    }

    let expr = Expr::binary(column, op, Expr::Value(value.clone()));
    Ok(if negated {
        query.where_not_expr(expr)
    } else {
        query.where_expr(expr)
    })
}

fn membership(condition: &Condition, mut query: SqlQuery, negated: bool) -> Result<SqlQuery> {
    let field = expect_field(condition)?;
    let Some(items) = operand_value(field)?.as_array() else {
        return Err(malformed(field, "array").into());
    };

    let column = query.column(&field.field)?;
    let list = items.iter().cloned().map(Expr::Value).collect();
    Ok(query.where_expr(Expr::in_list(column, list, negated)))
}

fn operand_value(field: &FieldCondition) -> std::result::Result<&Value, InterpretError> {
    field
        .value
        .as_value()
        .ok_or_else(|| malformed(field, &format!("value, got {}", field.value.kind())))
}

fn malformed(field: &FieldCondition, expected: &str) -> InterpretError {
    InterpretError::malformed(&field.operator, &field.field, expected)
}
