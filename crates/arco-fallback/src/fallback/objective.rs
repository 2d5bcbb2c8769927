use arco_core::{ModelError, ModelLike, Sense};
use arco_expr::{Function, TypeKey};

use super::UniversalFallback;

impl<M: ModelLike> UniversalFallback<M> {
    /// Keep `function` out-of-band and tell the delegate its objective
    /// changed.
    ///
    /// The delegate sees the change as a round trip of its sense through
    /// [`Sense::Feasibility`], which also drops whatever objective it held.
    pub(super) fn set_fallback_objective<F: Function>(
        &mut self,
        function: F,
    ) -> Result<(), ModelError> {
        self.ensure_variables_exist(&function)?;
        let sense = self.inner.objective_sense();
        self.inner.set_objective_sense(Sense::Feasibility)?;
        self.inner.set_objective_sense(sense)?;
        self.objective.set(function);
        tracing::debug!(
            component = "fallback",
            operation = "set_objective",
            status = "success",
            function_type = %TypeKey::of::<F>(),
            sense = sense.as_str(),
            "Stored unsupported objective"
        );
        Ok(())
    }

    pub(super) fn clear_fallback_objective(&mut self) {
        if self.objective.is_set() {
            self.objective.clear();
            tracing::debug!(
                component = "fallback",
                operation = "clear_objective",
                status = "success",
                "Dropped stored objective"
            );
        }
    }
}
