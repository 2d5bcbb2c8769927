//! Slot holding an objective function of any type.

use std::any::Any;
use std::fmt;

use arco_expr::{Function, Modify, TypeKey, VariableIndex};

use crate::error::ModelError;

trait ErasedFunction: fmt::Debug {
    fn as_any(&self) -> &dyn Any;
    fn clone_box(&self) -> Box<dyn ErasedFunction>;
    fn function_type(&self) -> TypeKey;
    /// `None` when the function is fixed to one of `variables`.
    fn without_variables(&self, variables: &[VariableIndex]) -> Option<Box<dyn ErasedFunction>>;
}

impl<F: Function> ErasedFunction for F {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn ErasedFunction> {
        Box::new(self.clone())
    }

    fn function_type(&self) -> TypeKey {
        TypeKey::of::<F>()
    }

    fn without_variables(&self, variables: &[VariableIndex]) -> Option<Box<dyn ErasedFunction>> {
        match self.single_variable() {
            Some(variable) if variables.contains(&variable) => None,
            _ => Some(Box::new(self.remove_variables(variables))),
        }
    }
}

/// At most one objective function, typed at the call site.
#[derive(Debug, Default)]
pub struct ObjectiveSlot {
    function: Option<Box<dyn ErasedFunction>>,
}

impl Clone for ObjectiveSlot {
    fn clone(&self) -> Self {
        Self {
            function: self.function.as_ref().map(|function| (**function).clone_box()),
        }
    }
}

impl ObjectiveSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.function.is_some()
    }

    pub fn function_type(&self) -> Option<TypeKey> {
        self.function.as_ref().map(|function| function.function_type())
    }

    pub fn set<F: Function>(&mut self, function: F) {
        self.function = Some(Box::new(function));
    }

    /// Stored function as `F`; [`ModelError::TypeMismatch`] if it has another type.
    pub fn get<F: Function>(&self) -> Result<Option<F>, ModelError> {
        let Some(function) = &self.function else {
            return Ok(None);
        };
        function
            .as_any()
            .downcast_ref::<F>()
            .cloned()
            .map(Some)
            .ok_or_else(|| ModelError::type_mismatch(TypeKey::of::<F>(), function.function_type()))
    }

    pub fn modify<F: Modify<C>, C>(&mut self, change: &C) -> Result<(), ModelError> {
        let current = self.get::<F>()?.ok_or(ModelError::NoObjective)?;
        let modified = current.apply_modification(change)?;
        self.set(modified);
        Ok(())
    }

    /// Drop `variables` from the stored function. A function fixed to one of
    /// them is discarded. Returns true when the slot was emptied.
    pub fn remove_variables(&mut self, variables: &[VariableIndex]) -> bool {
        let Some(function) = self.function.take() else {
            return false;
        };
        self.function = function.without_variables(variables);
        self.function.is_none()
    }

    pub fn clear(&mut self) {
        self.function = None;
    }
}
