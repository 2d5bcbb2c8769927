//! Serializable report of what a fallback model holds out-of-band.

use serde::Serialize;

/// Number of stored constraints of one function/set pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintCount {
    pub function: String,
    pub set: String,
    pub count: usize,
}

/// Snapshot of the fallback containers.
///
/// Attribute kinds are rendered with their labels, e.g.
/// `RawOptimizerAttribute(presolve)`. Entries keep first-insert order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FallbackSummary {
    pub constraints: Vec<ConstraintCount>,
    pub named_constraints: usize,
    /// Function type of the stored objective.
    pub objective: Option<String>,
    pub optimizer_attributes: Vec<String>,
    pub model_attributes: Vec<String>,
    pub variable_attributes: Vec<String>,
    pub constraint_attributes: Vec<String>,
}

impl FallbackSummary {
    /// True when nothing is held out-of-band.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
            && self.objective.is_none()
            && self.optimizer_attributes.is_empty()
            && self.model_attributes.is_empty()
            && self.variable_attributes.is_empty()
            && self.constraint_attributes.is_empty()
    }

    pub fn total_constraints(&self) -> usize {
        self.constraints.iter().map(|entry| entry.count).sum()
    }
}
