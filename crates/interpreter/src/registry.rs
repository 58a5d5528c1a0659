use crate::{
    context::Context,
    error::{InterpretError, Result},
    target::Target,
};
use model::Condition;
use std::{collections::HashMap, fmt};

/// A handler for one operator of target `T`.
pub type Handler<T> = for<'a> fn(
    &Condition,
    <T as Target>::Accumulator<'a>,
    &Context<'a, T>,
) -> std::result::Result<<T as Target>::Accumulator<'a>, <T as Target>::Error>;

/// Registry of operator handlers, keyed by operator name.
pub struct Registry<T: Target> {
    handlers: HashMap<String, Handler<T>>,
}

impl<T: Target> Registry<T> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers `handler` under `name`, replacing any previous handler.
    pub fn register(&mut self, name: &str, handler: Handler<T>) {
        self.handlers.insert(name.to_string(), handler);
    }

    pub fn with(mut self, name: &str, handler: Handler<T>) -> Self {
        self.register(name, handler);
        self
    }

    /// Registers `alias` as another name for the handler of `existing`.
    pub fn alias(mut self, alias: &str, existing: &str) -> Result<Self> {
        let handler =
            self.get(existing)
                .ok_or_else(|| InterpretError::UnknownOperator {
                    operator: existing.to_string(),
                    field: None,
                })?;
        self.register(alias, handler);
        Ok(self)
    }

    /// Returns a new registry holding the handlers of both; `other` wins on
    /// name clashes. Neither input is modified.
    pub fn merge(&self, other: &Registry<T>) -> Registry<T> {
        let mut handlers = self.handlers.clone();
        handlers.extend(other.handlers.iter().map(|(k, v)| (k.clone(), *v)));
        Registry { handlers }
    }

    pub fn get(&self, name: &str) -> Option<Handler<T>> {
        self.handlers.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered operator names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T: Target> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Target> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<T: Target> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("operators", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expect_field;

    struct Count;

    impl Target for Count {
        type Accumulator<'a> = u32;
        type Services = ();
        type Error = InterpretError;
    }

    fn one(_: &Condition, acc: u32, _: &Context<'_, Count>) -> Result<u32> {
        Ok(acc + 1)
    }

    fn ten(_: &Condition, acc: u32, _: &Context<'_, Count>) -> Result<u32> {
        Ok(acc + 10)
    }

    fn leaf_only(condition: &Condition, acc: u32, _: &Context<'_, Count>) -> Result<u32> {
        expect_field(condition)?;
        Ok(acc)
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = Registry::<Count>::new().with("eq", one).with("ne", leaf_only);

        assert!(registry.contains("eq"));
        assert!(!registry.contains("gt"));
        assert_eq!(registry.names(), vec!["eq", "ne"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_alias_shares_handler() {
        let registry = Registry::<Count>::new().with("within", ten);
        let aliased = registry.clone().alias("in", "within").unwrap();

        let handler = aliased.get("in").unwrap();
        let ctx = Context::new(&aliased, &());
        let condition = Condition::field("in", "age", vec![1]);
        assert_eq!(handler(&condition, 0, &ctx).unwrap(), 10);

        assert!(!registry.contains("in"));
    }

    #[test]
    fn test_alias_of_unknown_operator_fails() {
        let err = Registry::<Count>::new().alias("in", "within").unwrap_err();
        assert!(matches!(err, InterpretError::UnknownOperator { ref operator, .. } if operator == "within"));
    }

    #[test]
    fn test_merge_prefers_later_registry_and_keeps_originals() {
        let base = Registry::<Count>::new().with("eq", one).with("gt", one);
        let overrides = Registry::<Count>::new().with("eq", ten).with("lt", ten);

        let merged = base.merge(&overrides);
        let ctx = Context::new(&merged, &());
        let condition = Condition::field("eq", "age", 1);

        assert_eq!(merged.names(), vec!["eq", "gt", "lt"]);
        assert_eq!(merged.get("eq").unwrap()(&condition, 0, &ctx).unwrap(), 10);

        assert_eq!(base.names(), vec!["eq", "gt"]);
        assert_eq!(overrides.names(), vec!["eq", "lt"]);
        let base_ctx = Context::new(&base, &());
        assert_eq!(base.get("eq").unwrap()(&condition, 0, &base_ctx).unwrap(), 1);
    }
}
