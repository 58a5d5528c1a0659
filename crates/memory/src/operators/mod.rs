pub mod comparison;
pub mod logical;

use crate::target::Memory;
use interpreter::Registry;
use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_REGISTRY: Registry<Memory> = build_default_registry();
}

/// The built-in in-memory operators, with `in` as an alias of `within`.
pub fn default_registry() -> Registry<Memory> {
    DEFAULT_REGISTRY.clone()
}

fn build_default_registry() -> Registry<Memory> {
    Registry::<Memory>::new()
        .with("eq", comparison::eq)
        .with("ne", comparison::ne)
        .with("lt", comparison::lt)
        .with("lte", comparison::lte)
        .with("gt", comparison::gt)
        .with("gte", comparison::gte)
        .with("within", comparison::within)
        .with("in", comparison::within)
        .with("nin", comparison::nin)
        .with("exists", comparison::exists)
        .with("mod", comparison::modulo)
        .with("regex", comparison::regex)
        .with("elemMatch", comparison::elem_match)
        .with("and", logical::and)
        .with("or", logical::or)
        .with("not", logical::not)
        .with("nor", logical::nor)
}
