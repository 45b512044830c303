mod ext;
mod sequence;
mod sparse;

pub mod ops;

pub use ext::SequenceExt;
pub use ops::{
    find_first, find_first_index, find_first_with, modify, remove, try_find_first, try_modify,
    try_remove,
};
pub use sequence::Sequence;
pub use sparse::SparseVec;

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use bench::{default_rng, random_slots, random_values};
    use rand::Rng;

    use super::{Sequence, SparseVec, find_first, find_first_index, modify, remove};

    fn is_even(x: &i64, _: usize) -> bool {
        x % 2 == 0
    }

    fn to_vec<S: Sequence<Item = i64>>(seq: &S) -> Vec<i64> {
        (0..seq.len()).filter_map(|i| seq.get(i).copied()).collect()
    }

    #[test]
    fn examples_hold_for_every_backend() {
        let base = [1_i64, 2, 3, 4, 5];

        let mut v = base.to_vec();
        let mut d = VecDeque::from(base);
        let mut s: SparseVec<i64> = base.iter().copied().map(Some).collect();
        remove(&mut v, is_even);
        remove(&mut d, is_even);
        remove(&mut s, is_even);
        assert_eq!(v, [1, 3, 5]);
        assert_eq!(to_vec(&d), [1, 3, 5]);
        assert_eq!(to_vec(&s), [1, 3, 5]);

        let mut v = base.to_vec();
        let mut d = VecDeque::from(base);
        let mut s: SparseVec<i64> = base.iter().copied().map(Some).collect();
        modify(&mut v, is_even, |x| x * 10);
        modify(&mut d, is_even, |x| x * 10);
        modify(&mut s, is_even, |x| x * 10);
        assert_eq!(v, [1, 20, 3, 40, 5]);
        assert_eq!(to_vec(&d), [1, 20, 3, 40, 5]);
        assert_eq!(to_vec(&s), [1, 20, 3, 40, 5]);

        let d = VecDeque::from(base);
        let s: SparseVec<i64> = base.iter().copied().map(Some).collect();
        assert_eq!(find_first(&base.to_vec(), |&x, _, _| x > 3), Some(&4));
        assert_eq!(find_first(&d, |&x, _, _| x > 3), Some(&4));
        assert_eq!(find_first(&s, |&x, _, _| x > 3), Some(&4));
        assert_eq!(find_first(&d, |&x, _, _| x > 10), None);
        assert_eq!(find_first(&s, |&x, _, _| x > 10), None);
    }

    #[test]
    fn find_first_skips_holes() {
        let sparse = SparseVec::from(vec![None, None, Some(7), None, Some(9)]);
        let mut visited = Vec::new();
        let found = find_first_index(&sparse, |&x, i, _| {
            visited.push(i);
            x > 7
        });
        assert_eq!(found, Some(4));
        assert_eq!(visited, [2, 4]);
        assert_eq!(find_first(&sparse, |_, _, _| true), Some(&7));
    }

    #[test]
    fn remove_and_modify_keep_holes() {
        let slots = vec![Some(1), None, Some(2), None, Some(3), Some(4)];

        let mut sparse = SparseVec::from(slots.clone());
        assert_eq!(modify(&mut sparse, |_, _| true, |x: &i32| -x), 4);
        assert_eq!(
            sparse.as_slots(),
            &[Some(-1), None, Some(-2), None, Some(-3), Some(-4)]
        );

        let mut sparse = SparseVec::from(slots);
        assert_eq!(remove(&mut sparse, |&x, _| x % 2 == 0), 2);
        assert_eq!(sparse.as_slots(), &[Some(1), None, None, Some(3)]);
        assert_eq!(remove(&mut sparse, |_, _| true), 2);
        assert_eq!(sparse.as_slots(), &[None, None]);
    }

    #[test]
    fn random_cases_match_std() {
        let mut rng = default_rng();

        for n in 0..64 {
            for _ in 0..16 {
                let values = random_values(&mut rng, n, -8..=8);
                let modulus = rng.random_range(1..=4_i64);
                let matcher = |x: &i64, i: usize| (x + i as i64).rem_euclid(modulus) == 0;

                let mut expected = Vec::with_capacity(n);
                for (i, &x) in values.iter().enumerate() {
                    if !matcher(&x, i) {
                        expected.push(x);
                    }
                }
                let mut removed = values.clone();
                let count = remove(&mut removed, matcher);
                assert_eq!(removed, expected, "remove n={n} m={modulus}");
                assert_eq!(count, n - expected.len());

                let mut deque = VecDeque::from(values.clone());
                remove(&mut deque, matcher);
                assert_eq!(to_vec(&deque), expected, "remove deque n={n} m={modulus}");

                let mut expected = values.clone();
                for (i, x) in expected.iter_mut().enumerate() {
                    if matcher(&*x, i) {
                        *x = *x * 3 - 1;
                    }
                }
                let mut modified = values.clone();
                modify(&mut modified, matcher, |x| x * 3 - 1);
                assert_eq!(modified, expected, "modify n={n} m={modulus}");

                let target = rng.random_range(-8..=8_i64);
                let expected = values.iter().position(|&x| x == target);
                let found = find_first_index(&values, |&x, _, _| x == target);
                assert_eq!(found, expected, "find n={n} target={target}");
                assert_eq!(
                    find_first(&values, |&x, _, _| x == target),
                    expected.map(|i| &values[i])
                );
            }
        }
    }

    #[test]
    fn random_sparse_matches_dense_filter() {
        let mut rng = default_rng();

        for n in 0..48 {
            let slots = random_slots(&mut rng, n, -8..=8, 0.3);

            let mut sparse = SparseVec::from(slots.clone());
            remove(&mut sparse, |&x, _| x < 0);
            let expected: Vec<Option<i64>> = slots
                .iter()
                .copied()
                .filter(|slot| !slot.is_some_and(|x| x < 0))
                .collect();
            assert_eq!(sparse.as_slots(), expected.as_slice(), "n={n}");

            let first_positive = slots.iter().flatten().copied().find(|&x| x > 0);
            let sparse = SparseVec::from(slots);
            assert_eq!(find_first(&sparse, |&x, _, _| x > 0).copied(), first_positive);
        }
    }
}
