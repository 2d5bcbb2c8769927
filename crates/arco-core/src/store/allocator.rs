//! Constraint index allocation.

use arco_expr::{ConstraintIndex, Function, Set};

/// Monotonic source of constraint index values.
///
/// Values start at 1, are shared by every (function, set) pair of one owner,
/// and are never handed out twice until [`IndexAllocator::reset`]. Functions
/// fixed to a single variable bypass the counter: their index value is the
/// variable's value.
#[derive(Debug, Clone, Default)]
pub struct IndexAllocator {
    last: u32,
}

impl IndexAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate<F: Function, S: Set>(&mut self, function: &F) -> ConstraintIndex<F, S> {
        self.allocate_unused(function, |_| false)
    }

    /// Like [`IndexAllocator::allocate`], but counter values for which
    /// `taken` holds are skipped. Single-variable indices are never skipped.
    pub fn allocate_unused<F: Function, S: Set>(
        &mut self,
        function: &F,
        mut taken: impl FnMut(ConstraintIndex<F, S>) -> bool,
    ) -> ConstraintIndex<F, S> {
        if let Some(variable) = function.single_variable() {
            return ConstraintIndex::new(variable.inner());
        }
        loop {
            self.last += 1;
            let index = ConstraintIndex::new(self.last);
            if !taken(index) {
                return index;
            }
        }
    }

    pub fn reset(&mut self) {
        self.last = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::IndexAllocator;
    use arco_expr::{
        ConstraintIndex, EqualTo, LessThan, ScalarAffineFunction, SingleVariable, VariableIndex,
    };

    #[test]
    fn single_variable_index_equals_variable() {
        let mut allocator = IndexAllocator::new();
        let f = SingleVariable::new(VariableIndex::new(42));
        let ci: ConstraintIndex<SingleVariable, EqualTo> = allocator.allocate(&f);
        assert_eq!(ci.inner(), 42);
    }

    #[test]
    fn counter_is_monotonic_across_pairs_until_reset() {
        let mut allocator = IndexAllocator::new();
        let f = ScalarAffineFunction::from_constant(0.0);
        let a: ConstraintIndex<ScalarAffineFunction, LessThan> = allocator.allocate(&f);
        let b: ConstraintIndex<ScalarAffineFunction, EqualTo> = allocator.allocate(&f);
        assert_eq!((a.inner(), b.inner()), (1, 2));

        allocator.reset();
        let c: ConstraintIndex<ScalarAffineFunction, LessThan> = allocator.allocate(&f);
        assert_eq!(c.inner(), 1);
    }

    #[test]
    fn taken_values_are_skipped_and_consumed() {
        let mut allocator = IndexAllocator::new();
        let f = ScalarAffineFunction::from_constant(0.0);
        let a: ConstraintIndex<ScalarAffineFunction, LessThan> =
            allocator.allocate_unused(&f, |index| index.inner() <= 2);
        assert_eq!(a.inner(), 3);
        let b: ConstraintIndex<ScalarAffineFunction, LessThan> = allocator.allocate(&f);
        assert_eq!(b.inner(), 4);

        let bound = SingleVariable::new(VariableIndex::new(9));
        let c: ConstraintIndex<SingleVariable, EqualTo> =
            allocator.allocate_unused(&bound, |_| true);
        assert_eq!(c.inner(), 9);
    }
}
