use crate::Sequence;

/// Sequence whose slots may be empty.
///
/// Holes count towards `len()` and keep their position, but `get` reports
/// them as `None`, so the scans in this crate never hand a hole to a
/// closure. `remove_at` deletes a slot whether or not it holds a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseVec<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for SparseVec<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> SparseVec<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_len(len: usize) -> Self {
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || None);
        Self { slots }
    }

    /// Number of slots, holes included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding a value.
    pub fn count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_hole(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    pub fn push(&mut self, value: T) {
        self.slots.push(Some(value));
    }

    pub fn push_hole(&mut self) {
        self.slots.push(None);
    }

    /// Stores `value` at `index`, growing the sequence with holes when
    /// `index` is past the end. Returns the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        if index >= self.slots.len() {
            log::debug!(
                "SparseVec::set: growing from {} to {} slots",
                self.slots.len(),
                index + 1
            );
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index].replace(value)
    }

    /// Turns the slot at `index` into a hole without shifting anything.
    pub fn clear(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Present values with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|x| (i, x)))
    }

    pub fn as_slots(&self) -> &[Option<T>] {
        &self.slots
    }

    pub fn into_inner(self) -> Vec<Option<T>> {
        self.slots
    }
}

impl<T> From<Vec<Option<T>>> for SparseVec<T> {
    fn from(slots: Vec<Option<T>>) -> Self {
        Self { slots }
    }
}

impl<T> FromIterator<Option<T>> for SparseVec<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

impl<T> Sequence for SparseVec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)?.as_mut()
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.slots.len() {
            self.slots.remove(index)
        } else {
            None
        }
    }
}
