use crate::{Sequence, ops};

/// Method syntax for the operations in [`ops`](crate::ops).
///
/// Implemented for every [`Sequence`]; only callers that import the trait
/// see the methods.
pub trait SequenceExt: Sequence {
    /// See [`ops::remove`].
    fn remove_where<M>(&mut self, matcher: M) -> usize
    where
        M: FnMut(&Self::Item, usize) -> bool,
    {
        ops::remove(self, matcher)
    }

    /// See [`ops::modify`].
    fn modify_where<M, F>(&mut self, matcher: M, modifier: F) -> usize
    where
        M: FnMut(&Self::Item, usize) -> bool,
        F: FnMut(&Self::Item) -> Self::Item,
    {
        ops::modify(self, matcher, modifier)
    }

    /// See [`ops::find_first`].
    fn find_first<P>(&self, predicate: P) -> Option<&Self::Item>
    where
        P: FnMut(&Self::Item, usize, &Self) -> bool,
    {
        ops::find_first(self, predicate)
    }

    /// See [`ops::find_first_index`].
    fn find_first_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&Self::Item, usize, &Self) -> bool,
    {
        ops::find_first_index(self, predicate)
    }

    /// See [`ops::find_first_with`].
    fn find_first_with<C, P>(&self, context: &C, predicate: P) -> Option<&Self::Item>
    where
        C: ?Sized,
        P: FnMut(&C, &Self::Item, usize, &Self) -> bool,
    {
        ops::find_first_with(self, context, predicate)
    }

    /// See [`ops::try_remove`].
    fn try_remove_where<M, E>(&mut self, matcher: M) -> Result<usize, E>
    where
        M: FnMut(&Self::Item, usize) -> Result<bool, E>,
    {
        ops::try_remove(self, matcher)
    }

    /// See [`ops::try_modify`].
    fn try_modify_where<M, F, E>(&mut self, matcher: M, modifier: F) -> Result<usize, E>
    where
        M: FnMut(&Self::Item, usize) -> Result<bool, E>,
        F: FnMut(&Self::Item) -> Result<Self::Item, E>,
    {
        ops::try_modify(self, matcher, modifier)
    }

    /// See [`ops::try_find_first`].
    fn try_find_first<P, E>(&self, predicate: P) -> Result<Option<&Self::Item>, E>
    where
        P: FnMut(&Self::Item, usize, &Self) -> Result<bool, E>,
    {
        ops::try_find_first(self, predicate)
    }
}

impl<S: Sequence + ?Sized> SequenceExt for S {}
