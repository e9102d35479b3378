use std::ops::{Bound, RangeBounds};

use crate::index::{IndexType, NodeIndex};
use crate::node::Node;
use crate::set::OrderedSet;

/// Pushes a link of nodes on the left to stack.
fn left_link<T, Ix>(set_ref: &OrderedSet<T, Ix>, mut x: NodeIndex<Ix>) -> Vec<NodeIndex<Ix>>
where
    T: Ord,
    Ix: IndexType,
{
    let mut nodes = vec![];
    while !set_ref.node_ref(x, Node::is_sentinel) {
        nodes.push(x);
        x = set_ref.node_ref(x, Node::left);
    }
    nodes
}

/// An iterator over the values of an `OrderedSet`, in ascending order.
#[derive(Debug)]
pub struct Iter<'a, T, Ix>
where
    T: Ord,
{
    /// Reference to the set
    pub(crate) set_ref: &'a OrderedSet<T, Ix>,
    /// Stack for iteration
    pub(crate) stack: Vec<NodeIndex<Ix>>,
}

impl<'a, T, Ix> Iter<'a, T, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    pub(crate) fn new(set_ref: &'a OrderedSet<T, Ix>) -> Self {
        Iter {
            set_ref,
            stack: left_link(set_ref, set_ref.root),
        }
    }
}

impl<'a, T, Ix> Iterator for Iter<'a, T, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.stack.is_empty() {
            return None;
        }
        let x = self.stack.pop().unwrap();
        self.stack.extend(left_link(
            self.set_ref,
            self.set_ref.node_ref(x, Node::right),
        ));
        Some(self.set_ref.node_ref(x, Node::value))
    }
}

/// An owning iterator over the values of an `OrderedSet`, in ascending order.
#[derive(Debug)]
pub struct IntoIter<T, Ix>
where
    T: Ord,
{
    set: OrderedSet<T, Ix>,
    /// Stack for iteration
    pub(crate) stack: Vec<NodeIndex<Ix>>,
}

impl<T, Ix> IntoIter<T, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    pub(crate) fn new(set: OrderedSet<T, Ix>) -> Self {
        let mut temp = IntoIter { set, stack: vec![] };
        temp.stack = left_link(&temp.set, temp.set.root);
        temp
    }
}

impl<T, Ix> Iterator for IntoIter<T, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.stack.is_empty() {
            return None;
        }
        let x = self.stack.pop().unwrap();
        self.stack
            .extend(left_link(&self.set, self.set.node_ref(x, Node::right)));
        let res = &mut self.set.nodes[x.index()];
        Some(res.value.take().unwrap())
    }
}

/// Whether `value` lies at or after the start bound of `range`.
fn above_start<T, R>(range: &R, value: &T) -> bool
where
    T: Ord,
    R: RangeBounds<T>,
{
    match range.start_bound() {
        Bound::Included(start) => value >= start,
        Bound::Excluded(start) => value > start,
        Bound::Unbounded => true,
    }
}

/// Whether `value` lies at or before the end bound of `range`.
fn below_end<T, R>(range: &R, value: &T) -> bool
where
    T: Ord,
    R: RangeBounds<T>,
{
    match range.end_bound() {
        Bound::Included(end) => value <= end,
        Bound::Excluded(end) => value < end,
        Bound::Unbounded => true,
    }
}

/// Pushes a link of nodes on the left to stack, skipping subtrees that lie
/// entirely before the start bound.
fn left_link_in_range<T, R, Ix>(
    set_ref: &OrderedSet<T, Ix>,
    mut x: NodeIndex<Ix>,
    range: &R,
) -> Vec<NodeIndex<Ix>>
where
    T: Ord,
    R: RangeBounds<T>,
    Ix: IndexType,
{
    let mut nodes = vec![];
    while !set_ref.node_ref(x, Node::is_sentinel) {
        if above_start(range, set_ref.node_ref(x, Node::value)) {
            nodes.push(x);
            x = set_ref.node_ref(x, Node::left);
        } else {
            x = set_ref.node_ref(x, Node::right);
        }
    }
    nodes
}

/// An iterator over the values of an `OrderedSet` restricted to a range of
/// values. It's equal to `iter().filter()` but faster than the latter, as
/// subtrees outside the range are never visited.
#[derive(Debug)]
pub struct RangeIter<'a, T, R, Ix>
where
    T: Ord,
{
    /// Reference to the set
    pub(crate) set_ref: &'a OrderedSet<T, Ix>,
    /// Stack for iteration
    pub(crate) stack: Vec<NodeIndex<Ix>>,
    /// Bounds of the iteration
    pub(crate) range: R,
}

impl<'a, T, R, Ix> RangeIter<'a, T, R, Ix>
where
    T: Ord,
    R: RangeBounds<T>,
    Ix: IndexType,
{
    pub(crate) fn new(set_ref: &'a OrderedSet<T, Ix>, range: R) -> Self {
        RangeIter {
            set_ref,
            stack: left_link_in_range(set_ref, set_ref.root, &range),
            range,
        }
    }
}

impl<'a, T, R, Ix> Iterator for RangeIter<'a, T, R, Ix>
where
    T: Ord,
    R: RangeBounds<T>,
    Ix: IndexType,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.stack.is_empty() {
            return None;
        }
        let x = self.stack.pop().unwrap();
        // Values pop in ascending order, so the first one past the end bound
        // ends the iteration.
        if !below_end(&self.range, self.set_ref.node_ref(x, Node::value)) {
            self.stack.clear();
            return None;
        }
        self.stack.extend(left_link_in_range(
            self.set_ref,
            self.set_ref.node_ref(x, Node::right),
            &self.range,
        ));
        Some(self.set_ref.node_ref(x, Node::value))
    }
}

impl<T, Ix> IntoIterator for OrderedSet<T, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    type Item = T;
    type IntoIter = IntoIter<T, Ix>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, Ix> IntoIterator for &'a OrderedSet<T, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, Ix>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}
