//! An unbalanced BST over ordered keys. Duplicate keys are stored as distinct nodes and the tree
//! answers inclusive range counts. Nodes live in an arena and refer to each other by slot index,
//! including a non-owning parent link that deletion uses to re-link a node's parent.
//!
//! Nothing rebalances the tree. Inserting keys in sorted order builds a tree with a single path
//! from the root, which is why every traversal here uses an explicit stack.
//!
//! # Examples
//!
//! ```
//! use treepath::bst::{Order, Tree};
//!
//! let mut tree = Tree::new();
//! for word in ["m", "f", "t", "a", "m"] {
//!     tree.insert(word.to_string());
//! }
//!
//! // Both copies of "m" are counted.
//! assert_eq!(tree.range_count("a", "m"), 4);
//! assert_eq!(tree.render(Order::InOrder), "a f m m t");
//!
//! // Deleting goes through a handle obtained from `find`.
//! let handle = tree.find("t");
//! assert_eq!(tree.delete(handle)?, Some("t".to_string()));
//! assert_eq!(tree.find("t"), None);
//!
//! // A missing key gives no handle, and deleting no handle deletes nothing.
//! assert_eq!(tree.delete(tree.find("z"))?, None);
//! # Ok::<(), treepath::Error>(())
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::error::{Error, Result};
use crate::util::Splice;

/// A reference to a node, issued by the tree that holds it.
///
/// A handle is only good until the node it refers to is removed. After that the tree rejects it
/// with [`Error::StaleHandle`], even if the slot has been reused for a new node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle {
    index: usize,
    generation: u32,
}

/// The order in which [`Tree::traverse`] and [`Tree::render`] visit nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree. Keys come out sorted.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// A Binary Search Tree of keys. Keys equal to a node's key are inserted into its left subtree,
/// so for every node all keys on the left are `<=` its key and all keys on the right are `>`.
#[derive(Clone)]
pub struct Tree<K> {
    slots: Vec<Slot<K>>,
    /// Indices of empty slots, reused before the arena grows.
    free: Vec<usize>,
    root: Link,
    len: usize,
}

#[derive(Clone)]
struct Slot<K> {
    /// Bumped every time the slot's node is removed.
    generation: u32,
    node: Option<Node<K>>,
}

/// An optional slot index. Child links own the node they point to, parent links don't.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Link(Option<usize>);

#[derive(Clone)]
struct Node<K> {
    key: K,
    left: Link,
    right: Link,
    parent: Link,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("keys", &self.traverse(Order::InOrder))
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: Link(None),
            len: 0,
        }
    }

    /// The number of keys in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts the key and returns a handle to its node. Nothing is deduplicated: inserting a key
    /// that is already present adds another node for it. Callers wanting set semantics should
    /// [`find`][Self::find] first.
    ///
    /// # Examples
    ///
    /// ```
    /// use treepath::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.range_count(&1, &1), 2);
    /// ```
    pub fn insert(&mut self, key: K) -> Handle
    where
        K: Ord,
    {
        let mut parent = Link(None);
        let mut goes_left = false;
        let mut cursor = self.root;
        while let Link(Some(index)) = cursor {
            let node = self.node(index);
            parent = cursor;
            goes_left = key <= node.key;
            cursor = if goes_left { node.left } else { node.right };
        }

        let handle = self.allocate(Node {
            key,
            left: Link(None),
            right: Link(None),
            parent,
        });
        let new_link = Link(Some(handle.index));
        match parent.0 {
            None => self.root = new_link,
            Some(parent) if goes_left => self.node_mut(parent).left = new_link,
            Some(parent) => self.node_mut(parent).right = new_link,
        }

        if cfg!(debug_assertions) {
            self.check_links(handle.index);
            if let Link(Some(parent)) = parent {
                let parent = self.node(parent);
                let key = &self.node(handle.index).key;
                assert!(if goes_left {
                    key <= &parent.key
                } else {
                    key > &parent.key
                });
            }
        }
        handle
    }

    /// Finds a node holding the given key. With duplicates, this is the first one met on the way
    /// down from the root. Descending goes left when the key is smaller than a node's key and
    /// right otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use treepath::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("apple".to_string());
    ///
    /// let handle = tree.find("apple").unwrap();
    /// assert_eq!(tree.key(handle).map(String::as_str), Some("apple"));
    /// assert_eq!(tree.find("pear"), None);
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.root;
        while let Link(Some(index)) = cursor {
            let node = self.node(index);
            cursor = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(self.handle(index)),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// The key the handle's node currently holds, or `None` for a stale handle.
    pub fn key(&self, handle: Handle) -> Option<&K> {
        self.resolve(handle).ok().map(|index| &self.node(index).key)
    }

    /// Deletes the node the handle refers to and returns the key it held. Passing `None` deletes
    /// nothing and returns `Ok(None)`, which makes `tree.delete(tree.find(&key))` do the obvious
    /// thing.
    ///
    /// A node with two children is not unlinked itself. It takes its in-order successor's key and
    /// the successor's node is unlinked instead. The handle passed in then stays valid and refers
    /// to the successor key, while any handle to the successor's old node goes stale.
    ///
    /// # Errors
    ///
    /// [`Error::StaleHandle`] if the handle's node has already been removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use treepath::bst::{Order, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for key in [5, 3, 8, 7, 9] {
    ///     tree.insert(key);
    /// }
    ///
    /// let five = tree.find(&5);
    /// assert_eq!(tree.delete(five)?, Some(5));
    /// assert_eq!(tree.render(Order::PreOrder), "7 3 8 9");
    ///
    /// // The handle now refers to the node that took the successor's key.
    /// assert_eq!(tree.key(five.unwrap()), Some(&7));
    /// # Ok::<(), treepath::Error>(())
    /// ```
    pub fn delete(&mut self, handle: Option<Handle>) -> Result<Option<K>> {
        let Some(handle) = handle else {
            return Ok(None);
        };
        let index = self.resolve(handle)?;
        let (left, right) = {
            let node = self.node(index);
            (node.left, node.right)
        };

        let splice = match (left, right) {
            (Link(None), _) => Splice::Right,
            (_, Link(None)) => Splice::Left,
            (_, Link(Some(right))) => Splice::Successor(self.min_node(right)),
        };
        let removed = match splice {
            Splice::Right => self.splice_out(index, right),
            Splice::Left => self.splice_out(index, left),
            Splice::Successor(successor) => {
                let successor_right = self.node(successor).right;
                let successor_key = self.splice_out(successor, successor_right);
                mem::replace(&mut self.node_mut(index).key, successor_key)
            }
        };
        Ok(Some(removed))
    }

    /// Finds one node holding `key` and deletes it.
    ///
    /// # Examples
    ///
    /// ```
    /// use treepath::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let handle = self.find(key)?;
        // A handle straight out of `find` is live, so this can't fail.
        self.delete(Some(handle)).ok().flatten()
    }

    /// Counts the keys `k` with `low <= k <= high`. An empty range (including `low > high`)
    /// counts zero.
    ///
    /// This walks the whole tree. Subtrees are not pruned against the bounds, so it costs
    /// `O(len)` regardless of how many keys fall in the range.
    pub fn range_count<Q>(&self, low: &Q, high: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.iter()
            .filter(|key| {
                let key: &Q = (*key).borrow();
                low <= key && key <= high
            })
            .count()
    }

    /// Iterates over the keys in sorted order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            tree: self,
            stack: Vec::new(),
            cursor: self.root,
        }
    }

    /// Collects the keys in the given traversal order.
    pub fn traverse(&self, order: Order) -> Vec<&K> {
        self.indices(order)
            .into_iter()
            .map(|index| &self.node(index).key)
            .collect()
    }

    /// Joins the keys, in the given traversal order, with single spaces. An empty tree renders as
    /// an empty string.
    pub fn render(&self, order: Order) -> String
    where
        K: fmt::Display,
    {
        self.traverse(order)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has height
    /// 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(usize, usize)> = self.root.0.map(|root| (root, 1)).into_iter().collect();
        while let Some((index, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(index);
            for child in [node.left, node.right].into_iter().filter_map(|link| link.0) {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// Removes every node, children before parents, and returns how many were removed. Calling
    /// this on an empty tree does nothing. All outstanding handles go stale.
    pub fn clear(&mut self) -> usize {
        if self.root.0.is_none() {
            return 0;
        }

        let order = self.indices(Order::PostOrder);
        for &index in &order {
            self.release(index);
        }
        self.root = Link(None);

        debug_assert_eq!(self.len, 0);
        tracing::trace!(freed = order.len(), "tree_cleared");
        order.len()
    }

    fn node(&self, index: usize) -> &Node<K> {
        self.slots[index]
            .node
            .as_ref()
            .expect("Links only point at occupied slots")
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<K> {
        self.slots[index]
            .node
            .as_mut()
            .expect("Links only point at occupied slots")
    }

    fn handle(&self, index: usize) -> Handle {
        Handle {
            index,
            generation: self.slots[index].generation,
        }
    }

    /// Checks that the handle still refers to a live node and returns its slot index.
    fn resolve(&self, handle: Handle) -> Result<usize> {
        match self.slots.get(handle.index) {
            Some(slot) if slot.generation == handle.generation && slot.node.is_some() => {
                Ok(handle.index)
            }
            _ => Err(Error::StaleHandle),
        }
    }

    fn allocate(&mut self, node: Node<K>) -> Handle {
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                self.slots[index].node = Some(node);
                self.handle(index)
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                self.handle(self.slots.len() - 1)
            }
        }
    }

    /// Empties the slot and invalidates every handle to it. Does not touch any links.
    fn release(&mut self, index: usize) -> Node<K> {
        let slot = &mut self.slots[index];
        let node = slot.node.take().expect("Releasing an occupied slot");
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        self.len -= 1;
        node
    }

    /// The leftmost node of the subtree rooted at `index`.
    fn min_node(&self, mut index: usize) -> usize {
        while let Link(Some(left)) = self.node(index).left {
            index = left;
        }
        index
    }

    /// Unlinks a node with at most one child, putting `child` (that child, or nothing) in its
    /// place, and returns its key.
    fn splice_out(&mut self, index: usize, child: Link) -> K {
        let node = self.release(index);
        match node.parent.0 {
            None => self.root = child,
            Some(parent) => {
                let parent = self.node_mut(parent);
                if parent.left == Link(Some(index)) {
                    parent.left = child;
                } else {
                    parent.right = child;
                }
            }
        }
        if let Link(Some(child)) = child {
            self.node_mut(child).parent = node.parent;
        }

        if cfg!(debug_assertions) {
            if let Link(Some(parent)) = node.parent {
                self.check_links(parent);
            }
        }
        node.key
    }

    /// Node indices in the given traversal order.
    fn indices(&self, order: Order) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.len);
        match order {
            Order::InOrder => {
                let mut stack = Vec::new();
                let mut cursor = self.root;
                loop {
                    while let Link(Some(index)) = cursor {
                        stack.push(index);
                        cursor = self.node(index).left;
                    }
                    let Some(index) = stack.pop() else {
                        break;
                    };
                    out.push(index);
                    cursor = self.node(index).right;
                }
            }
            Order::PreOrder => {
                let mut stack: Vec<usize> = self.root.0.into_iter().collect();
                while let Some(index) = stack.pop() {
                    out.push(index);
                    let node = self.node(index);
                    stack.extend(node.right.0);
                    stack.extend(node.left.0);
                }
            }
            Order::PostOrder => {
                // Node, right, left reversed is left, right, node.
                let mut stack: Vec<usize> = self.root.0.into_iter().collect();
                while let Some(index) = stack.pop() {
                    out.push(index);
                    let node = self.node(index);
                    stack.extend(node.left.0);
                    stack.extend(node.right.0);
                }
                out.reverse();
            }
        }
        out
    }

    /// Asserts that the node's children point back at it and that its parent (or the root) points
    /// at it.
    fn check_links(&self, index: usize) {
        let node = self.node(index);
        for child in [node.left, node.right].into_iter().filter_map(|link| link.0) {
            assert_eq!(self.node(child).parent, Link(Some(index)));
        }
        match node.parent.0 {
            None => assert_eq!(self.root, Link(Some(index))),
            Some(parent) => {
                let parent = self.node(parent);
                assert!(parent.left == Link(Some(index)) || parent.right == Link(Some(index)));
            }
        }
    }
}

/// In-order iterator over a tree's keys, created by [`Tree::iter`].
pub struct Iter<'a, K> {
    tree: &'a Tree<K>,
    stack: Vec<usize>,
    cursor: Link,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Link(Some(index)) = self.cursor {
            self.stack.push(index);
            self.cursor = self.tree.node(index).left;
        }
        let index = self.stack.pop()?;
        let node = self.tree.node(index);
        self.cursor = node.right;
        Some(&node.key)
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
