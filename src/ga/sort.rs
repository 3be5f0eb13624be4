//! Fitness-ranked sorting of parallel genome/value sequences.
//!
//! The population keeps genomes and fitnesses in two vectors that share one
//! permutation. [`sort_with_values`] reorders both together.
//!
//! No stability is promised: items with equal values may change relative
//! order. Only monotonicity of the values is guaranteed.

use crate::error::{GeneticError, Result};

/// Direction of a [`sort_with_values`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Sorts `items` and `values` together by `values`.
///
/// After the call `values` is monotonic in the requested direction and each
/// item sits at the same index as the value it started next to.
///
/// # Errors
/// [`GeneticError::LengthMismatch`] if the sequences differ in length; both
/// are left untouched.
///
/// # Complexity
/// O(n log n)
pub fn sort_with_values<T, V: Ord>(
    order: SortOrder,
    items: &mut Vec<T>,
    values: &mut Vec<V>,
) -> Result<()> {
    if items.len() != values.len() {
        return Err(GeneticError::LengthMismatch {
            left: items.len(),
            right: values.len(),
        });
    }

    let mut paired: Vec<(T, V)> = items.drain(..).zip(values.drain(..)).collect();
    match order {
        SortOrder::Ascending => paired.sort_unstable_by(|a, b| a.1.cmp(&b.1)),
        SortOrder::Descending => paired.sort_unstable_by(|a, b| b.1.cmp(&a.1)),
    }

    for (item, value) in paired {
        items.push(item);
        values.push(value);
    }
    Ok(())
}
