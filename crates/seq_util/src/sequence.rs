use std::collections::VecDeque;

/// Ordered, index-addressable container the operations in this crate work on.
///
/// - Indices are contiguous: `0..len()`.
/// - `get`/`get_mut` return `None` for out-of-range indices and for slots
///   that hold no element (holes).
/// - `remove_at` deletes the slot and shifts every later slot down by one.
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&Self::Item>;
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;
    fn remove_at(&mut self, index: usize) -> Option<Self::Item>;
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < Vec::len(self) {
            Some(self.remove(index))
        } else {
            None
        }
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> Option<T> {
        self.remove(index)
    }
}
