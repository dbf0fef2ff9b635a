//! In-place quicksort over a shuffled permutation of `0..20`.

/// A permutation of `0..20`; sorted, `a[i] == i` for every index.
pub const QUICKSORT_INPUT: [i32; 20] = [
    2, 12, 14, 6, 13, 15, 16, 10, 0, 18, 11, 19, 9, 1, 7, 5, 4, 3, 8, 17,
];

/// Sort `a` ascending using Lomuto partitioning around the last element.
pub fn quick_sort(a: &mut [i32]) {
    if a.len() <= 1 {
        return;
    }
    let pivot = partition(a);
    let (left, right) = a.split_at_mut(pivot);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

fn partition(a: &mut [i32]) -> usize {
    let last = a.len() - 1;
    let pivot = a[last];
    let mut store = 0;
    for i in 0..last {
        if a[i] <= pivot {
            a.swap(i, store);
            store += 1;
        }
    }
    a.swap(store, last);
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_permutation_into_identity() {
        let mut a = QUICKSORT_INPUT;
        quick_sort(&mut a);
        for (i, v) in a.iter().enumerate() {
            assert_eq!(*v, i as i32);
        }
    }

    #[test]
    fn resorting_sorted_input_changes_nothing() {
        let mut a = QUICKSORT_INPUT;
        quick_sort(&mut a);
        let once = a;
        quick_sort(&mut a);
        assert_eq!(a, once);
    }

    #[test]
    fn handles_duplicates_and_tiny_inputs() {
        let mut dup = [3, 1, 3, 2, 1];
        quick_sort(&mut dup);
        assert_eq!(dup, [1, 1, 2, 3, 3]);

        let mut empty: [i32; 0] = [];
        quick_sort(&mut empty);
        let mut one = [7];
        quick_sort(&mut one);
        assert_eq!(one, [7]);
    }
}
