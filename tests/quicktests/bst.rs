use treepath::bst::{Order, Tree};

use std::collections::HashMap;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and to a map of key counts.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same multiset of keys in both.
fn do_ops(ops: &[Op<i8>], bst: &mut Tree<i8>, counts: &mut HashMap<i8, usize>) -> bool {
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(*k);
                *counts.entry(*k).or_default() += 1;
            }
            Op::Remove(k) => {
                let deleted = bst.delete(bst.find(k)).unwrap();
                let expected = match counts.get_mut(k) {
                    Some(count) if *count > 0 => {
                        *count -= 1;
                        Some(*k)
                    }
                    _ => None,
                };
                if deleted != expected {
                    return false;
                }
            }
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = HashMap::new();

    do_ops(&ops, &mut tree, &mut counts)
        && counts
            .iter()
            .all(|(key, count)| tree.range_count(key, key) == *count)
        && tree.len() == counts.values().sum::<usize>()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn find_then_delete_counts_duplicates(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| {
        let inserted = xs.iter().filter(|y| *y == x).count();
        let mut deleted = 0;
        while let Some(handle) = tree.find(x) {
            tree.delete(Some(handle)).unwrap();
            deleted += 1;
        }
        // Later iterations of the same key find nothing left.
        deleted == inserted || deleted == 0
    }) && tree.is_empty()
}

#[quickcheck]
fn deleting_everything_empties_the_tree(xs: Vec<i8>, order: Vec<usize>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    // Delete in an arbitrary order derived from `order`.
    let mut remaining = xs.clone();
    let mut picks = order.into_iter();
    while !remaining.is_empty() {
        let pick = picks.next().unwrap_or(0) % remaining.len();
        let key = remaining.swap_remove(pick);
        if tree.remove(&key) != Some(key) {
            return false;
        }
    }

    tree.is_empty() && xs.iter().all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn in_order_is_non_decreasing(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut HashMap::new());

    let keys = tree.traverse(Order::InOrder);
    keys.windows(2).all(|pair| pair[0] <= pair[1]) && keys.len() == tree.len()
}

#[quickcheck]
fn range_count_matches_filter(xs: Vec<String>, low: String, high: String) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(x.clone());
    }

    let expected = xs.iter().filter(|x| low <= **x && **x <= high).count();
    tree.range_count(&low, &high) == expected
        && tree.range_count(&low, &low) == xs.iter().filter(|x| **x == low).count()
}
