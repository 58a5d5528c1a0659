pub mod comparison;
pub mod logical;

use crate::target::Sql;
use interpreter::Registry;
use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_REGISTRY: Registry<Sql> = build_default_registry();
}

/// The built-in relational operators, with `in` as an alias of `within`.
pub fn default_registry() -> Registry<Sql> {
    DEFAULT_REGISTRY.clone()
}

fn build_default_registry() -> Registry<Sql> {
    Registry::<Sql>::new()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_covers_builtins() {
        let registry = default_registry();
        assert_eq!(
            registry.names(),
            vec![
                "and", "elemMatch", "eq", "exists", "gt", "gte", "in", "lt", "lte", "mod", "ne",
                "nin", "nor", "not", "or", "regex", "within",
            ]
        );
    }
}
