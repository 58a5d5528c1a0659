use crate::{error::InterpretError, registry::Registry, target::Target};
use model::Condition;
use tracing::{debug, trace};

/// State of a single top-level interpretation: the active registry and the
/// target's services. Handlers use it to interpret child conditions with the
/// same registry that dispatched them.
pub struct Context<'c, T: Target> {
    registry: &'c Registry<T>,
    services: &'c T::Services,
}

impl<'c, T: Target> Context<'c, T> {
    pub fn new(registry: &'c Registry<T>, services: &'c T::Services) -> Self {
        Self { registry, services }
    }

    /// Dispatches `condition` to the handler registered for its operator.
    pub fn interpret(
        &self,
        condition: &Condition,
        accumulator: T::Accumulator<'c>,
    ) -> Result<T::Accumulator<'c>, T::Error> {
        let operator = condition.operator().name();
        let field = condition.field_name();
        trace!(operator, field = ?field, "Interpreting condition");

        let Some(handler) = self.registry.get(operator) else {
            debug!(operator, field = ?field, "No interpreter registered");
            return Err(InterpretError::UnknownOperator {
                operator: operator.to_string(),
                field: field.map(String::from),
            }
            .into());
        };

        handler(condition, accumulator, self)
    }

    pub fn services(&self) -> &'c T::Services {
        self.services
    }

    pub fn registry(&self) -> &'c Registry<T> {
        self.registry
    }
}
