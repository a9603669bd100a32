/// How [`Tree::delete`][crate::bst::Tree::delete] detaches the node a handle refers to.
pub(crate) enum Splice {
    /// The node has no left child. Its right subtree (which may be empty) takes its place.
    Right,
    /// The node has a left child but no right child. Its left subtree takes its place.
    Left,
    /// The node has two children. It takes the key of the successor stored in the given slot and
    /// the successor, which never has a left child, is spliced out instead.
    Successor(usize),
}
