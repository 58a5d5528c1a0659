use crate::target::{Evaluation, Memory};
use interpreter::{Context, Result, expect_compound};
use model::Condition;

type Ctx<'a> = Context<'a, Memory>;

pub fn and<'a>(condition: &Condition, acc: Evaluation<'a>, ctx: &Ctx<'a>) -> Result<Evaluation<'a>> {
    Ok(acc.with(all_match(condition, acc, ctx)?))
}

pub fn or<'a>(condition: &Condition, acc: Evaluation<'a>, ctx: &Ctx<'a>) -> Result<Evaluation<'a>> {
    Ok(acc.with(any_match(condition, acc, ctx)?))
}

/// Negates the conjunction of all children.
pub fn not<'a>(condition: &Condition, acc: Evaluation<'a>, ctx: &Ctx<'a>) -> Result<Evaluation<'a>> {
    Ok(acc.with(!all_match(condition, acc, ctx)?))
}

pub fn nor<'a>(condition: &Condition, acc: Evaluation<'a>, ctx: &Ctx<'a>) -> Result<Evaluation<'a>> {
    Ok(acc.with(!any_match(condition, acc, ctx)?))
}

fn all_match(condition: &Condition, acc: Evaluation<'_>, ctx: &Ctx<'_>) -> Result<bool> {
    for child in &expect_compound(condition)?.children {
        if !ctx.interpret(child, acc)?.matched {
            return Ok(false);
        }
    }
    Ok(true)
}

fn any_match(condition: &Condition, acc: Evaluation<'_>, ctx: &Ctx<'_>) -> Result<bool> {
    for child in &expect_compound(condition)?.children {
        if ctx.interpret(child, acc)?.matched {
            return Ok(true);
        }
    }
    Ok(false)
}
