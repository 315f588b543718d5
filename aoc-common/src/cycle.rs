//! Endless repetition over a fixed list.

use crate::error::CommonError;

/// Cursor that walks a non-empty list forever, wrapping at the end.
///
/// [`Cycle::advance`] moves to the next element and returns it; the first
/// call returns the first element. [`Cycle::current`] is the element last
/// returned, if any.
#[derive(Debug, Clone)]
pub struct Cycle<T> {
    items: Vec<T>,
    position: Option<usize>,
}

impl<T> Cycle<T> {
    /// # Errors
    ///
    /// [`CommonError::EmptyCollection`] when `items` is empty.
    pub fn new<I>(items: I) -> Result<Self, CommonError>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        if items.is_empty() {
            return Err(CommonError::EmptyCollection(
                "cannot cycle over an empty list".to_string(),
            ));
        }
        Ok(Self {
            items,
            position: None,
        })
    }

    pub fn advance(&mut self) -> &T {
        let next = match self.position {
            Some(position) => (position + 1) % self.items.len(),
            None => 0,
        };
        self.position = Some(next);
        &self.items[next]
    }

    pub fn current(&self) -> Option<&T> {
        self.position.map(|position| &self.items[position])
    }

    /// Index of the current element.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Number of elements in one round.
    pub fn period(&self) -> usize {
        self.items.len()
    }

    /// Forgets the current element; the next advance starts over.
    pub fn reset(&mut self) {
        self.position = None;
    }
}

impl<T: Clone> Iterator for Cycle<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.advance().clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_rejected() {
        assert!(matches!(
            Cycle::<u8>::new(Vec::new()),
            Err(CommonError::EmptyCollection(_))
        ));
    }

    #[test]
    fn test_advance_wraps() {
        let mut cycle = Cycle::new("LRL".chars()).unwrap();
        assert_eq!(cycle.current(), None);
        let seen: Vec<char> = (0..7).map(|_| *cycle.advance()).collect();
        assert_eq!(seen, vec!['L', 'R', 'L', 'L', 'R', 'L', 'L']);
        assert_eq!(cycle.current(), Some(&'L'));
        assert_eq!(cycle.position(), Some(0));
    }

    #[test]
    fn test_iterator_and_reset() {
        let mut cycle = Cycle::new([1, 2]).unwrap();
        assert_eq!(cycle.by_ref().take(3).collect::<Vec<_>>(), vec![1, 2, 1]);
        cycle.reset();
        assert_eq!(cycle.next(), Some(1));
        assert_eq!(cycle.period(), 2);
    }
}
