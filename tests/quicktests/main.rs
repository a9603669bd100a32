mod bfs;
mod bst;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// an ordered key set in a quicktest.
#[derive(Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Find one copy of the K and delete it through its handle
    Remove(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }
}
