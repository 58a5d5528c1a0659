use crate::target::{Evaluation, Memory};
use interpreter::{Context, InterpretError, Result, expect_field};
use model::{Condition, FieldCondition, Operand, Value};
use regex::RegexBuilder;
use std::cmp::Ordering;
use tracing::debug;

type Ctx<'a> = Context<'a, Memory>;

pub fn eq<'a>(condition: &Condition, acc: Evaluation<'a>, ctx: &Ctx<'a>) -> Result<Evaluation<'a>> {
    let field = expect_field(condition)?;
    Ok(acc.with(test_equal(field, acc, ctx)?))
}

pub fn ne<'a>(condition: &Condition, acc: Evaluation<'a>, ctx: &Ctx<'a>) -> Result<Evaluation<'a>> {
    let field = expect_field(condition)?;
    Ok(acc.with(!test_equal(field, acc, ctx)?))
}

pub fn lt<'a>(condition: &Condition, acc: Evaluation<'a>, ctx: &Ctx<'a>) -> Result<Evaluation<'a>> {
    ordered(condition, acc, ctx, |o| o == Ordering::Less)
}

pub fn lte<'a>(condition: &Condition, acc: Evaluation<'a>, ctx: &Ctx<'a>) -> Result<Evaluation<'a>> {
    ordered(condition, acc, ctx, |o| o != Ordering::Greater)
}

pub fn gt<'a>(condition: &Condition, acc: Evaluation<'a>, ctx: &Ctx<'a>) -> Result<Evaluation<'a>> {
    ordered(condition, acc, ctx, |o| o == Ordering::Greater)
}

pub fn gte<'a>(condition: &Condition, acc: Evaluation<'a>, ctx: &Ctx<'a>) -> Result<Evaluation<'a>> {
    ordered(condition, acc, ctx, |o| o != Ordering::Less)
}

pub fn within<'a>(condition: &Condition, acc: Evaluation<'a>, ctx: &Ctx<'a>) -> Result<Evaluation<'a>> {
    let field = expect_field(condition)?;
    Ok(acc.with(test_within(field, acc, ctx)?))
}

pub fn nin<'a>(condition: &Condition, acc: Evaluation<'a>, ctx: &Ctx<'a>) -> Result<Evaluation<'a>> {
    let field = expect_field(condition)?;
    Ok(acc.with(!test_within(field, acc, ctx)?))
}

/// A truthy operand requires the field to be present and non-null; a falsy
/// one requires it to be absent or null.
pub fn exists<'a>(condition: &Condition, acc: Evaluation<'a>, ctx: &Ctx<'a>) -> Result<Evaluation<'a>> {
    let field = expect_field(condition)?;
    let expected = operand_value(field)?.is_truthy();
    let present = read(field, acc, ctx).is_some_and(|value| !value.is_null());
    Ok(acc.with(present == expected))
}

/// `[divisor, remainder]`: matches integers where `value % divisor == remainder`.
pub fn modulo<'a>(condition: &Condition, acc: Evaluation<'a>, ctx: &Ctx<'a>) -> Result<Evaluation<'a>> {
    let field = expect_field(condition)?;
    let (divisor, remainder) = match operand_value(field)?.as_array() {
        Some([divisor, remainder]) => match (divisor.as_i64(), remainder.as_i64()) {
            (Some(divisor), Some(remainder)) if divisor != 0 => (divisor, remainder),
            _ => return Err(malformed(field, "[non-zero divisor, remainder] integers")),
        },
        _ => return Err(malformed(field, "[divisor, remainder] array")),
    };

    let actual = read(field, acc, ctx).unwrap_or_default();
    let matched = test_value_or_items(&actual, false, |value| {
        value.as_i64().is_some_and(|n| n.wrapping_rem(divisor) == remainder)
    });
    Ok(acc.with(matched))
}

pub fn regex<'a>(condition: &Condition, acc: Evaluation<'a>, ctx: &Ctx<'a>) -> Result<Evaluation<'a>> {
    let field = expect_field(condition)?;
    let Operand::Pattern(pattern) = &field.value else {
        return Err(malformed(field, "regex pattern"));
    };
    let re = RegexBuilder::new(&pattern.source)
        .case_insensitive(pattern.ignore_case)
        .build()
        .map_err(|e| {
            debug!(pattern = %pattern.source, error = %e, "Rejected regex pattern");
            malformed(field, "valid regular expression")
        })?;

    let actual = read(field, acc, ctx).unwrap_or_default();
    let matched = test_value_or_items(&actual, false, |value| {
        value.as_str().is_some_and(|s| re.is_match(s))
    });
    Ok(acc.with(matched))
}

/// Matches when some element of the array field satisfies the nested condition.
pub fn elem_match<'a>(
    condition: &Condition,
    acc: Evaluation<'a>,
    ctx: &Ctx<'a>,
) -> Result<Evaluation<'a>> {
    let field = expect_field(condition)?;
    let Operand::Condition(nested) = &field.value else {
        return Err(malformed(field, "nested condition"));
    };

    let Some(Value::Array(items)) = read(field, acc, ctx) else {
        return Ok(acc.with(false));
    };
    for item in &items {
        if ctx.interpret(nested, Evaluation::new(item))?.matched {
            return Ok(acc.with(true));
        }
    }
    Ok(acc.with(false))
}

fn read(field: &FieldCondition, acc: Evaluation<'_>, ctx: &Ctx<'_>) -> Option<Value> {
    (ctx.services().get)(acc.subject, &field.field)
}

fn operand_value(field: &FieldCondition) -> Result<&Value> {
    field
        .value
        .as_value()
        .ok_or_else(|| malformed(field, &format!("value, got {}", field.value.kind())))
}

fn malformed(field: &FieldCondition, expected: &str) -> InterpretError {
    InterpretError::malformed(&field.operator, &field.field, expected)
}

/// Applies `test` to `actual`, or to each of its elements when the field
/// holds an array but the operand does not.
fn test_value_or_items(actual: &Value, operand_is_array: bool, test: impl Fn(&Value) -> bool) -> bool {
    match actual {
        Value::Array(items) if !operand_is_array => items.iter().any(test),
        _ => test(actual),
    }
}

// A missing field compares as null.
fn test_equal(field: &FieldCondition, acc: Evaluation<'_>, ctx: &Ctx<'_>) -> Result<bool> {
    let expected = operand_value(field)?;
    let actual = read(field, acc, ctx).unwrap_or_default();
    let options = ctx.services();
    Ok(test_value_or_items(&actual, expected.as_array().is_some(), |value| {
        options.equal(value, expected)
    }))
}

fn test_within(field: &FieldCondition, acc: Evaluation<'_>, ctx: &Ctx<'_>) -> Result<bool> {
    let Some(candidates) = operand_value(field)?.as_array() else {
        return Err(malformed(field, "array"));
    };
    let actual = read(field, acc, ctx).unwrap_or_default();
    let options = ctx.services();
    Ok(test_value_or_items(&actual, false, |value| {
        candidates
            .iter()
            .any(|candidate| options.equal(value, candidate))
    }))
}

fn ordered<'a>(
    condition: &Condition,
    acc: Evaluation<'a>,
    ctx: &Ctx<'a>,
    accept: fn(Ordering) -> bool,
) -> Result<Evaluation<'a>> {
    let field = expect_field(condition)?;
    let expected = operand_value(field)?;
    if !expected.is_scalar() || expected.is_null() {
        return Err(malformed(field, "non-null scalar"));
    }

    let Some(actual) = read(field, acc, ctx) else {
        return Ok(acc.with(false));
    };
    let compare = ctx.services().compare;
    let matched = test_value_or_items(&actual, false, |value| {
        compare(value, expected).is_some_and(accept)
    });
    Ok(acc.with(matched))
}
