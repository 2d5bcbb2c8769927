use arco_core::{ModelError, ModelLike};
use arco_expr::VariableIndex;

use super::UniversalFallback;

impl<M: ModelLike> UniversalFallback<M> {
    /// Delete `variables` from the delegate and from every fallback container.
    ///
    /// Fallback constraints are checked before the delegate is touched, so a
    /// fixed-dimension set that cannot lose a variable fails the call with
    /// nothing changed on either side.
    pub(super) fn delete_variables_everywhere(
        &mut self,
        variables: &[VariableIndex],
    ) -> Result<(), ModelError> {
        for variable in variables {
            self.ensure_variable_exists(*variable)?;
        }
        self.constraints.check_variable_removal(variables)?;
        self.inner.delete_variables(variables)?;

        self.variable_attributes.remove_indices(variables);
        let objective_dropped = self.objective.remove_variables(variables);
        let deleted = self.constraints.remove_variables(variables);
        self.names.retain(|index| !deleted.contains(&index));

        // The delegate may have cascaded into its own constraints too.
        let constraints = &self.constraints;
        let inner = &self.inner;
        self.constraint_attributes.retain_indices(|index| {
            constraints.contains_any(index) || inner.contains_constraint(index)
        });

        tracing::debug!(
            component = "fallback",
            operation = "delete_variables",
            status = "success",
            variables = variables.len(),
            constraints_deleted = deleted.len(),
            objective_dropped,
            "Cascaded variable deletion"
        );
        Ok(())
    }
}
