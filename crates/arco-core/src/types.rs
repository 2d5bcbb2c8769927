/// Optimization sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sense {
    Minimize,
    Maximize,
    /// No objective; setting this sense discards any objective function.
    #[default]
    Feasibility,
}

impl Sense {
    pub fn as_str(self) -> &'static str {
        match self {
            Sense::Minimize => "min",
            Sense::Maximize => "max",
            Sense::Feasibility => "feasibility",
        }
    }
}
