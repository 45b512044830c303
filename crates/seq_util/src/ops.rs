use crate::Sequence;

/// Deletes every element for which `matcher(element, index)` holds.
///
/// Scans from the back so deleting an element never moves one that has not
/// been visited yet; `index` is therefore always the element's position in
/// the sequence as it was passed in. Holes are skipped. Returns the number
/// of deleted elements.
pub fn remove<S, M>(seq: &mut S, mut matcher: M) -> usize
where
    S: Sequence + ?Sized,
    M: FnMut(&S::Item, usize) -> bool,
{
    let len = seq.len();
    let mut removed = 0usize;
    for i in (0..len).rev() {
        let hit = seq.get(i).is_some_and(|x| matcher(x, i));
        if hit {
            seq.remove_at(i);
            removed += 1;
        }
    }
    log::trace!("remove: {removed} of {len} elements");
    removed
}

/// Replaces every element for which `matcher(element, index)` holds with
/// `modifier(element)`. Returns the number of replaced elements.
///
/// The modifier borrows the current element and returns its replacement, so
/// a panic inside it leaves the element in place and unwinds to the caller.
pub fn modify<S, M, F>(seq: &mut S, mut matcher: M, mut modifier: F) -> usize
where
    S: Sequence + ?Sized,
    M: FnMut(&S::Item, usize) -> bool,
    F: FnMut(&S::Item) -> S::Item,
{
    let len = seq.len();
    let mut modified = 0usize;
    for i in (0..len).rev() {
        if let Some(slot) = seq.get_mut(i) {
            if matcher(&*slot, i) {
                *slot = modifier(&*slot);
                modified += 1;
            }
        }
    }
    log::trace!("modify: {modified} of {len} elements");
    modified
}

/// Index of the first element for which `predicate(element, index, seq)`
/// holds. Holes are skipped.
pub fn find_first_index<S, P>(seq: &S, mut predicate: P) -> Option<usize>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item, usize, &S) -> bool,
{
    (0..seq.len()).find(|&i| seq.get(i).is_some_and(|x| predicate(x, i, seq)))
}

/// First element for which `predicate(element, index, seq)` holds, or `None`.
pub fn find_first<S, P>(seq: &S, predicate: P) -> Option<&S::Item>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item, usize, &S) -> bool,
{
    find_first_index(seq, predicate).and_then(|i| seq.get(i))
}

/// [`find_first`] with an explicit context handed to every predicate call.
pub fn find_first_with<'a, S, C, P>(seq: &'a S, context: &C, mut predicate: P) -> Option<&'a S::Item>
where
    S: Sequence + ?Sized,
    C: ?Sized,
    P: FnMut(&C, &S::Item, usize, &S) -> bool,
{
    find_first(seq, |x, i, s| predicate(context, x, i, s))
}

/// Fallible [`remove`]: the first `Err` from `matcher` stops the scan and is
/// returned as is. Elements deleted before that stay deleted.
pub fn try_remove<S, M, E>(seq: &mut S, mut matcher: M) -> Result<usize, E>
where
    S: Sequence + ?Sized,
    M: FnMut(&S::Item, usize) -> Result<bool, E>,
{
    let len = seq.len();
    let mut removed = 0usize;
    for i in (0..len).rev() {
        let hit = match seq.get(i) {
            Some(x) => matcher(x, i)?,
            None => false,
        };
        if hit {
            seq.remove_at(i);
            removed += 1;
        }
    }
    log::trace!("try_remove: {removed} of {len} elements");
    Ok(removed)
}

/// Fallible [`modify`]. The modifier borrows the element and builds its
/// replacement, so an `Err` from either closure leaves the current element
/// untouched; elements replaced before it stay replaced.
pub fn try_modify<S, M, F, E>(seq: &mut S, mut matcher: M, mut modifier: F) -> Result<usize, E>
where
    S: Sequence + ?Sized,
    M: FnMut(&S::Item, usize) -> Result<bool, E>,
    F: FnMut(&S::Item) -> Result<S::Item, E>,
{
    let len = seq.len();
    let mut modified = 0usize;
    for i in (0..len).rev() {
        if let Some(slot) = seq.get_mut(i) {
            if matcher(&*slot, i)? {
                *slot = modifier(&*slot)?;
                modified += 1;
            }
        }
    }
    log::trace!("try_modify: {modified} of {len} elements");
    Ok(modified)
}

/// Fallible [`find_first`]: `Ok(None)` when nothing matches, `Err` as soon as
/// the predicate fails.
pub fn try_find_first<S, P, E>(seq: &S, mut predicate: P) -> Result<Option<&S::Item>, E>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item, usize, &S) -> Result<bool, E>,
{
    for i in 0..seq.len() {
        if let Some(x) = seq.get(i) {
            if predicate(x, i, seq)? {
                return Ok(Some(x));
            }
        }
    }
    Ok(None)
}
