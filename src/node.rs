use crate::index::{IndexType, NodeIndex};

/// Node of the red-black tree.
///
/// The sentinel is the unique node whose `value` is `None`; every leaf link
/// and the parent of the root point at it.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<T, Ix> {
    /// Left child
    pub left: Option<NodeIndex<Ix>>,
    /// Right child
    pub right: Option<NodeIndex<Ix>>,
    /// Parent
    pub parent: Option<NodeIndex<Ix>>,
    /// Color of the node
    pub color: Color,

    /// Value stored in the node, `None` only for the sentinel
    pub value: Option<T>,
}

// Convenient getter/setter methods
impl<T, Ix> Node<T, Ix>
where
    Ix: IndexType,
{
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn value(&self) -> &T {
        self.value.as_ref().unwrap()
    }

    pub fn take_value(&mut self) -> T {
        self.value.take().unwrap()
    }

    pub fn left(&self) -> NodeIndex<Ix> {
        self.left.unwrap()
    }

    pub fn right(&self) -> NodeIndex<Ix> {
        self.right.unwrap()
    }

    pub fn parent(&self) -> NodeIndex<Ix> {
        self.parent.unwrap()
    }

    pub fn is_sentinel(&self) -> bool {
        self.value.is_none()
    }

    pub fn is_black(&self) -> bool {
        matches!(self.color, Color::Black)
    }

    pub fn is_red(&self) -> bool {
        matches!(self.color, Color::Red)
    }

    pub fn replace_value(value: T) -> impl FnOnce(&mut Node<T, Ix>) -> T {
        move |node: &mut Node<T, Ix>| node.value.replace(value).unwrap()
    }

    pub fn set_color(color: Color) -> impl FnOnce(&mut Node<T, Ix>) {
        move |node: &mut Node<T, Ix>| {
            node.color = color;
        }
    }

    pub fn set_left(left: NodeIndex<Ix>) -> impl FnOnce(&mut Node<T, Ix>) {
        move |node: &mut Node<T, Ix>| {
            let _ignore = node.left.replace(left);
        }
    }

    pub fn set_right(right: NodeIndex<Ix>) -> impl FnOnce(&mut Node<T, Ix>) {
        move |node: &mut Node<T, Ix>| {
            let _ignore = node.right.replace(right);
        }
    }

    pub fn set_parent(parent: NodeIndex<Ix>) -> impl FnOnce(&mut Node<T, Ix>) {
        move |node: &mut Node<T, Ix>| {
            let _ignore = node.parent.replace(parent);
        }
    }
}

/// The color of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Red node
    Red,
    /// Black node
    Black,
}
