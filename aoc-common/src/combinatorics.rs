//! Lazy combinations and permutations of a slice.

use itertools::Itertools;

/// All `k`-element combinations of `items`, in lexicographic index order.
///
/// `k == 0` yields one empty combination; `k > items.len()` yields none.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> impl Iterator<Item = Vec<T>> + '_ {
    items.iter().cloned().combinations(k)
}

/// All orderings of `items`, in lexicographic index order.
///
/// An empty slice has exactly one ordering, the empty one.
pub fn permutations<T: Clone>(items: &[T]) -> impl Iterator<Item = Vec<T>> + '_ {
    items.iter().cloned().permutations(items.len())
}
