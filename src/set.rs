use std::cmp::Ordering;
use std::ops::RangeBounds;

use crate::index::{DefaultIx, IndexType, NodeIndex};
use crate::iter::{Iter, RangeIter};
use crate::node::{Color, Node};

/// An ordered set backed by an arena-allocated red-black tree.
///
/// Nodes live in a dense vector and reference each other by index; slot 0
/// holds the single shared black sentinel that stands in for every leaf and
/// for the parent of the root.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderedSet<T, Ix = DefaultIx> {
    /// Vector that stores nodes
    pub(crate) nodes: Vec<Node<T, Ix>>,
    /// Root of the tree
    pub(crate) root: NodeIndex<Ix>,
    /// Number of values in the set
    pub(crate) len: usize,
}

impl<T, Ix> OrderedSet<T, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    /// Creates a new `OrderedSet` with estimated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = vec![Self::new_sentinel()];
        nodes.reserve(capacity);
        OrderedSet {
            nodes,
            root: NodeIndex::SENTINEL,
            len: 0,
        }
    }

    /// Add a value to the set.
    ///
    /// Returns whether the value was newly inserted. Inserting a value that
    /// is already present leaves the set untouched.
    ///
    /// # Panics
    ///
    /// This method panics when the tree is at the maximum number of nodes for
    /// its index type.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert!(set.insert(3));
    /// assert!(!set.insert(3));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn insert(&mut self, value: T) -> bool {
        let mut y = NodeIndex::SENTINEL;
        let mut x = self.root;
        while !self.node_ref(x, Node::is_sentinel) {
            y = x;
            match value.cmp(self.node_ref(x, Node::value)) {
                Ordering::Equal => return false,
                Ordering::Less => x = self.node_ref(x, Node::left),
                Ordering::Greater => x = self.node_ref(x, Node::right),
            }
        }
        let z = NodeIndex::new(self.nodes.len());
        // check for max capacity, except if we use usize
        assert!(
            <Ix as IndexType>::max().index() == !0 || NodeIndex::end() != z,
            "Reached maximum number of nodes"
        );
        self.nodes.push(Self::new_node(value, y));
        if self.node_ref(y, Node::is_sentinel) {
            self.root = z;
        } else if self.node_ref(z, Node::value) < self.node_ref(y, Node::value) {
            self.node_mut(y, Node::set_left(z));
        } else {
            self.node_mut(y, Node::set_right(z));
        }

        self.insert_fixup(z);

        self.len = self.len.wrapping_add(1);
        true
    }

    /// Remove a value from the set, returning whether it was present.
    ///
    /// Removing an absent value leaves the set untouched.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&42));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn remove(&mut self, value: &T) -> bool {
        if let Some(z) = self.search_exact(value) {
            let y = self.remove_inner(z);
            // Swap the freed node with the last node stored in the vector and
            // update indices
            let _removed = self.nodes.swap_remove(y.index());
            let old = NodeIndex::<Ix>::new(self.nodes.len());
            self.update_idx(old, y);
            return true;
        }
        false
    }

    /// Return whether the set holds the given value.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(7);
    /// assert!(set.contains(&7));
    /// assert!(!set.contains(&8));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.search_exact(value).is_some()
    }

    /// Return a reference to the stored value equal to the given one.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(5);
    /// assert_eq!(set.get(&5), Some(&5));
    /// assert_eq!(set.get(&6), None);
    /// ```
    #[inline]
    pub fn get(&self, value: &T) -> Option<&T> {
        self.search_exact(value)
            .map(|idx| self.node_ref(idx, Node::value))
    }

    /// Return a reference to the smallest value in the set.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        if self.node_ref(self.root, Node::is_sentinel) {
            return None;
        }
        let idx = self.tree_minimum(self.root);
        Some(self.node_ref(idx, Node::value))
    }

    /// Return a reference to the largest value in the set.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(set.last(), Some(&3));
    /// ```
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        if self.node_ref(self.root, Node::is_sentinel) {
            return None;
        }
        let idx = self.tree_maximum(self.root);
        Some(self.node_ref(idx, Node::value))
    }

    /// Return the height of the tree, counted in nodes.
    ///
    /// An empty tree has height 0 and a single node has height 1. Balancing
    /// keeps this at O(log n).
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert_eq!(set.height(), 0);
    /// set.insert(2);
    /// assert_eq!(set.height(), 1);
    /// set.extend([1, 3]);
    /// assert_eq!(set.height(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height_inner(self.root)
    }

    /// Get an iterator over the values of the set, in sorted order.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [2, 3, 1].into_iter().collect();
    /// let sorted: Vec<i32> = set.iter().copied().collect();
    /// assert_eq!(sorted, vec![1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, Ix> {
        Iter::new(self)
    }

    /// Get an iterator over the values falling within the given range, in
    /// sorted order.
    ///
    /// Subtrees entirely outside the range are never visited.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = (0..10).collect();
    /// let mid: Vec<i32> = set.range(3..7).copied().collect();
    /// assert_eq!(mid, vec![3, 4, 5, 6]);
    /// ```
    #[inline]
    pub fn range<R>(&self, range: R) -> RangeIter<'_, T, R, Ix>
    where
        R: RangeBounds<T>,
    {
        RangeIter::new(self, range)
    }

    /// Remove all values from the set.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Self::new_sentinel());
        self.root = NodeIndex::SENTINEL;
        self.len = 0;
    }

    /// Return the number of values in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if the set contains no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the five red-black properties and the search-tree ordering.
    ///
    /// Diagnostic only: the mutating paths never call this, they maintain the
    /// properties by construction.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = (0..100).collect();
    /// assert!(set.validate());
    /// ```
    #[inline]
    #[must_use]
    pub fn validate(&self) -> bool {
        if !self.node_ref(NodeIndex::SENTINEL, Node::is_black) {
            return false;
        }
        if self.node_ref(self.root, Node::is_red) {
            return false;
        }
        self.validate_inner(self.root, None, None).is_some()
    }
}

impl<T> OrderedSet<T>
where
    T: Ord,
{
    /// Create an empty `OrderedSet`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Self::new_sentinel()],
            root: NodeIndex::SENTINEL,
            len: 0,
        }
    }
}

impl<T> Default for OrderedSet<T>
where
    T: Ord,
{
    #[inline]
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<T, Ix> OrderedSet<T, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    /// Create the shared sentinel node.
    fn new_sentinel() -> Node<T, Ix> {
        Node {
            value: None,
            left: None,
            right: None,
            parent: None,
            color: Color::Black,
        }
    }

    /// Create a new tree node, red at birth.
    fn new_node(value: T, parent: NodeIndex<Ix>) -> Node<T, Ix> {
        Node {
            value: Some(value),
            left: Some(NodeIndex::SENTINEL),
            right: Some(NodeIndex::SENTINEL),
            parent: Some(parent),
            color: Color::Red,
        }
    }
}

/// Shape of the violation repaired by one step of the insert fixup loop.
///
/// The loop classifies the tree around the cursor node into exactly one of
/// these cases and applies the matching transition; any other shape means the
/// loop is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertCase {
    /// Parent and uncle are both red: recolor them black, the grandparent
    /// red, and restart from the grandparent.
    RedUncle,
    /// Uncle is black and the cursor is an inner grandchild: rotate the
    /// parent so the shape straightens into `Line`.
    Triangle,
    /// Uncle is black and the cursor is an outer grandchild: recolor and
    /// rotate the grandparent, which terminates the loop.
    Line,
}

/// Shape of the violation repaired by one step of the remove fixup loop.
///
/// The cursor carries the "extra black" left behind by the removal of a
/// black node; each transition either resolves it or pushes it upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RemoveCase {
    /// The sibling is red: rotate it above the parent and re-classify.
    RedSibling,
    /// Black sibling with two black children: recolor it red and move the
    /// extra black up to the parent.
    TwoBlackNephews,
    /// Black sibling whose near child is red: rotate the sibling so the
    /// shape reduces to `FarNephewRed`.
    NearNephewRed,
    /// Black sibling whose far child is red: recolor and rotate the parent,
    /// which resolves the extra black and terminates the loop.
    FarNephewRed,
}

impl<T, Ix> OrderedSet<T, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    /// Find the node holding the given value.
    fn search_exact(&self, value: &T) -> Option<NodeIndex<Ix>> {
        let mut x = self.root;
        while !self.node_ref(x, Node::is_sentinel) {
            match value.cmp(self.node_ref(x, Node::value)) {
                Ordering::Equal => return Some(x),
                Ordering::Less => x = self.node_ref(x, Node::left),
                Ordering::Greater => x = self.node_ref(x, Node::right),
            }
        }
        None
    }

    /// Unlink a node from the tree and restore the red-black properties.
    ///
    /// Returns the arena slot that was actually spliced out, which is the
    /// node itself or its in-order successor.
    fn remove_inner(&mut self, z: NodeIndex<Ix>) -> NodeIndex<Ix> {
        let mut y = z;
        let mut y_orig_color = self.node_ref(y, Node::color);
        let x;
        if self.left_ref(z, Node::is_sentinel) {
            x = self.node_ref(z, Node::right);
            self.transplant(z, x);
        } else if self.right_ref(z, Node::is_sentinel) {
            x = self.node_ref(z, Node::left);
            self.transplant(z, x);
        } else {
            // Two real children: splice out the in-order successor, which has
            // at most a right child, and move its value into `z`.
            y = self.tree_minimum(self.node_ref(z, Node::right));
            y_orig_color = self.node_ref(y, Node::color);
            x = self.node_ref(y, Node::right);
            self.transplant(y, x);
            let succ = self.node_mut(y, Node::take_value);
            let _old = self.node_mut(z, Node::replace_value(succ));
        }

        if matches!(y_orig_color, Color::Black) {
            self.remove_fixup(x);
        }

        self.len = self.len.wrapping_sub(1);
        y
    }

    /// Restore red-black properties after an insert.
    fn insert_fixup(&mut self, mut z: NodeIndex<Ix>) {
        while let Some(case) = self.insert_case(z) {
            z = self.apply_insert_case(z, case);
        }
        self.node_mut(self.root, Node::set_color(Color::Black));
    }

    /// Classify the shape around `z`, or `None` when no violation remains.
    pub(crate) fn insert_case(&self, z: NodeIndex<Ix>) -> Option<InsertCase> {
        if !self.parent_ref(z, Node::is_red) {
            return None;
        }
        if self.grand_parent_ref(z, Node::is_sentinel) {
            return None;
        }
        let parent_is_left = self.is_left_child(self.node_ref(z, Node::parent));
        let uncle = if parent_is_left {
            self.grand_parent_ref(z, Node::right)
        } else {
            self.grand_parent_ref(z, Node::left)
        };
        if self.node_ref(uncle, Node::is_red) {
            Some(InsertCase::RedUncle)
        } else if parent_is_left != self.is_left_child(z) {
            Some(InsertCase::Triangle)
        } else {
            Some(InsertCase::Line)
        }
    }

    /// Apply one insert fixup transition, returning the next cursor node.
    pub(crate) fn apply_insert_case(
        &mut self,
        mut z: NodeIndex<Ix>,
        case: InsertCase,
    ) -> NodeIndex<Ix> {
        let parent_is_left = self.is_left_child(self.node_ref(z, Node::parent));
        match case {
            InsertCase::RedUncle => {
                let uncle = if parent_is_left {
                    self.grand_parent_ref(z, Node::right)
                } else {
                    self.grand_parent_ref(z, Node::left)
                };
                self.parent_mut(z, Node::set_color(Color::Black));
                self.node_mut(uncle, Node::set_color(Color::Black));
                self.grand_parent_mut(z, Node::set_color(Color::Red));
                self.parent_ref(z, Node::parent)
            }
            InsertCase::Triangle => {
                z = self.node_ref(z, Node::parent);
                if parent_is_left {
                    self.left_rotate(z);
                } else {
                    self.right_rotate(z);
                }
                z
            }
            InsertCase::Line => {
                self.parent_mut(z, Node::set_color(Color::Black));
                self.grand_parent_mut(z, Node::set_color(Color::Red));
                let grand = self.parent_ref(z, Node::parent);
                if parent_is_left {
                    self.right_rotate(grand);
                } else {
                    self.left_rotate(grand);
                }
                z
            }
        }
    }

    /// Restore red-black properties after a remove, starting from the node
    /// that replaced the spliced-out black node.
    fn remove_fixup(&mut self, mut x: NodeIndex<Ix>) {
        while x != self.root && self.node_ref(x, Node::is_black) {
            match self.remove_case(x) {
                Some(case) => x = self.apply_remove_case(x, case),
                None => break,
            }
        }
        self.node_mut(x, Node::set_color(Color::Black));
    }

    /// Classify the shape around `x`, or `None` for the sentinel sibling,
    /// which is unreachable on a valid tree.
    pub(crate) fn remove_case(&self, x: NodeIndex<Ix>) -> Option<RemoveCase> {
        let x_is_left = self.is_left_child(x);
        let w = if x_is_left {
            self.parent_ref(x, Node::right)
        } else {
            self.parent_ref(x, Node::left)
        };
        if self.node_ref(w, Node::is_red) {
            return Some(RemoveCase::RedSibling);
        }
        if self.node_ref(w, Node::is_sentinel) {
            return None;
        }
        let near = if x_is_left {
            self.node_ref(w, Node::left)
        } else {
            self.node_ref(w, Node::right)
        };
        let far = if x_is_left {
            self.node_ref(w, Node::right)
        } else {
            self.node_ref(w, Node::left)
        };
        if self.node_ref(far, Node::is_red) {
            Some(RemoveCase::FarNephewRed)
        } else if self.node_ref(near, Node::is_red) {
            Some(RemoveCase::NearNephewRed)
        } else {
            Some(RemoveCase::TwoBlackNephews)
        }
    }

    /// Apply one remove fixup transition, returning the next cursor node.
    pub(crate) fn apply_remove_case(
        &mut self,
        x: NodeIndex<Ix>,
        case: RemoveCase,
    ) -> NodeIndex<Ix> {
        let x_is_left = self.is_left_child(x);
        let w = if x_is_left {
            self.parent_ref(x, Node::right)
        } else {
            self.parent_ref(x, Node::left)
        };
        match case {
            RemoveCase::RedSibling => {
                self.node_mut(w, Node::set_color(Color::Black));
                self.parent_mut(x, Node::set_color(Color::Red));
                if x_is_left {
                    self.left_rotate(self.node_ref(x, Node::parent));
                } else {
                    self.right_rotate(self.node_ref(x, Node::parent));
                }
                x
            }
            RemoveCase::TwoBlackNephews => {
                self.node_mut(w, Node::set_color(Color::Red));
                self.node_ref(x, Node::parent)
            }
            RemoveCase::NearNephewRed => {
                if x_is_left {
                    self.left_mut(w, Node::set_color(Color::Black));
                    self.node_mut(w, Node::set_color(Color::Red));
                    self.right_rotate(w);
                } else {
                    self.right_mut(w, Node::set_color(Color::Black));
                    self.node_mut(w, Node::set_color(Color::Red));
                    self.left_rotate(w);
                }
                x
            }
            RemoveCase::FarNephewRed => {
                self.node_mut(w, Node::set_color(self.parent_ref(x, Node::color)));
                self.parent_mut(x, Node::set_color(Color::Black));
                if x_is_left {
                    self.right_mut(w, Node::set_color(Color::Black));
                    self.left_rotate(self.node_ref(x, Node::parent));
                } else {
                    self.left_mut(w, Node::set_color(Color::Black));
                    self.right_rotate(self.node_ref(x, Node::parent));
                }
                self.root
            }
        }
    }

    /// Binary tree left rotate.
    fn left_rotate(&mut self, x: NodeIndex<Ix>) {
        if self.right_ref(x, Node::is_sentinel) {
            return;
        }
        let y = self.node_ref(x, Node::right);
        self.node_mut(x, Node::set_right(self.node_ref(y, Node::left)));
        if !self.left_ref(y, Node::is_sentinel) {
            self.left_mut(y, Node::set_parent(x));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_left(x));
    }

    /// Binary tree right rotate.
    fn right_rotate(&mut self, x: NodeIndex<Ix>) {
        if self.left_ref(x, Node::is_sentinel) {
            return;
        }
        let y = self.node_ref(x, Node::left);
        self.node_mut(x, Node::set_left(self.node_ref(y, Node::right)));
        if !self.right_ref(y, Node::is_sentinel) {
            self.right_mut(y, Node::set_parent(x));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_right(x));
    }

    /// Replace parent during a rotation.
    fn replace_parent(&mut self, x: NodeIndex<Ix>, y: NodeIndex<Ix>) {
        self.node_mut(y, Node::set_parent(self.node_ref(x, Node::parent)));
        if self.parent_ref(x, Node::is_sentinel) {
            self.root = y;
        } else if self.is_left_child(x) {
            self.parent_mut(x, Node::set_left(y));
        } else {
            self.parent_mut(x, Node::set_right(y));
        }
        self.node_mut(x, Node::set_parent(y));
    }

    /// Find the node with the minimum value in the subtree rooted at `x`.
    fn tree_minimum(&self, mut x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        while !self.left_ref(x, Node::is_sentinel) {
            x = self.node_ref(x, Node::left);
        }
        x
    }

    /// Find the node with the maximum value in the subtree rooted at `x`.
    fn tree_maximum(&self, mut x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        while !self.right_ref(x, Node::is_sentinel) {
            x = self.node_ref(x, Node::right);
        }
        x
    }

    /// Replace one subtree as a child of its parent with another subtree.
    ///
    /// Rewires only the parent-side links; colors are untouched.
    fn transplant(&mut self, u: NodeIndex<Ix>, v: NodeIndex<Ix>) {
        if self.parent_ref(u, Node::is_sentinel) {
            self.root = v;
        } else if self.is_left_child(u) {
            self.parent_mut(u, Node::set_left(v));
        } else {
            self.parent_mut(u, Node::set_right(v));
        }
        self.node_mut(v, Node::set_parent(self.node_ref(u, Node::parent)));
    }

    /// Check if a node is a left child of its parent.
    fn is_left_child(&self, node: NodeIndex<Ix>) -> bool {
        self.parent_ref(node, Node::left) == node
    }

    /// Update node indices after the arena slot `old` was moved to `new` by
    /// `swap_remove`.
    fn update_idx(&mut self, old: NodeIndex<Ix>, new: NodeIndex<Ix>) {
        if self.root == old {
            self.root = new;
        }
        if self.nodes.get(new.index()).is_some() {
            if !self.parent_ref(new, Node::is_sentinel) {
                if self.parent_ref(new, Node::left) == old {
                    self.parent_mut(new, Node::set_left(new));
                } else {
                    self.parent_mut(new, Node::set_right(new));
                }
            }
            self.left_mut(new, Node::set_parent(new));
            self.right_mut(new, Node::set_parent(new));
        }
    }

    /// Recursive max-depth helper, counting nodes.
    fn height_inner(&self, x: NodeIndex<Ix>) -> usize {
        if self.node_ref(x, Node::is_sentinel) {
            return 0;
        }
        let lh = self.height_inner(self.node_ref(x, Node::left));
        let rh = self.height_inner(self.node_ref(x, Node::right));
        1 + lh.max(rh)
    }

    /// Return the black-height of the subtree rooted at `x`, counting the
    /// sentinel, or `None` on any red-black or ordering violation.
    ///
    /// `low`/`high` are the exclusive value bounds inherited from ancestors.
    fn validate_inner(
        &self,
        x: NodeIndex<Ix>,
        low: Option<&T>,
        high: Option<&T>,
    ) -> Option<usize> {
        if self.node_ref(x, Node::is_sentinel) {
            return Some(1);
        }
        let value = self.node_ref(x, Node::value);
        if low.is_some_and(|l| value <= l) || high.is_some_and(|h| value >= h) {
            return None;
        }
        if self.node_ref(x, Node::is_red)
            && (self.left_ref(x, Node::is_red) || self.right_ref(x, Node::is_red))
        {
            return None;
        }
        let lh = self.validate_inner(self.node_ref(x, Node::left), low, Some(value))?;
        let rh = self.validate_inner(self.node_ref(x, Node::right), Some(value), high)?;
        (lh == rh).then(|| lh + usize::from(self.node_ref(x, Node::is_black)))
    }
}

// Convenient methods for reference or mutate current/parent/left/right node
impl<'a, T, Ix> OrderedSet<T, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn node_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<T, Ix>) -> R,
    {
        op(&self.nodes[node.index()])
    }

    pub(crate) fn node_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<T, Ix>) -> R,
    {
        op(&mut self.nodes[node.index()])
    }

    pub(crate) fn left_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<T, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].left().index();
        op(&self.nodes[idx])
    }

    pub(crate) fn right_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<T, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].right().index();
        op(&self.nodes[idx])
    }

    pub(crate) fn parent_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<T, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].parent().index();
        op(&self.nodes[idx])
    }

    pub(crate) fn grand_parent_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<T, Ix>) -> R,
    {
        let parent_idx = self.nodes[node.index()].parent().index();
        let grand_parent_idx = self.nodes[parent_idx].parent().index();
        op(&self.nodes[grand_parent_idx])
    }

    pub(crate) fn left_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<T, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].left().index();
        op(&mut self.nodes[idx])
    }

    pub(crate) fn right_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<T, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].right().index();
        op(&mut self.nodes[idx])
    }

    pub(crate) fn parent_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<T, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].parent().index();
        op(&mut self.nodes[idx])
    }

    pub(crate) fn grand_parent_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<T, Ix>) -> R,
    {
        let parent_idx = self.nodes[node.index()].parent().index();
        let grand_parent_idx = self.nodes[parent_idx].parent().index();
        op(&mut self.nodes[grand_parent_idx])
    }
}

impl<T> FromIterator<T> for OrderedSet<T>
where
    T: Ord,
{
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        set.extend(iter);
        set
    }
}

impl<T, Ix> Extend<T> for OrderedSet<T, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            let _inserted = self.insert(value);
        }
    }
}
