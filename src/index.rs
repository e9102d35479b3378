use std::fmt;
use std::hash::Hash;

/// The default index type used by [`OrderedSet`](crate::OrderedSet).
pub type DefaultIx = u32;

/// Trait for types that can address nodes in the arena.
///
/// # Safety
///
/// Implementations must round-trip `new`/`index` losslessly for every value
/// up to `max`, otherwise node links may alias arbitrary arena slots.
pub unsafe trait IndexType: Copy + Default + Hash + Ord + fmt::Debug + 'static {
    /// The zero index, reserved for the sentinel slot.
    const ZERO: Self;

    fn new(x: usize) -> Self;
    fn index(&self) -> usize;
    fn max() -> Self;
}

unsafe impl IndexType for u16 {
    const ZERO: Self = 0;

    #[inline(always)]
    fn new(x: usize) -> Self {
        x as u16
    }
    #[inline(always)]
    fn index(&self) -> usize {
        *self as usize
    }
    #[inline(always)]
    fn max() -> Self {
        u16::MAX
    }
}

unsafe impl IndexType for u32 {
    const ZERO: Self = 0;

    #[inline(always)]
    fn new(x: usize) -> Self {
        x as u32
    }
    #[inline(always)]
    fn index(&self) -> usize {
        *self as usize
    }
    #[inline(always)]
    fn max() -> Self {
        u32::MAX
    }
}

unsafe impl IndexType for usize {
    const ZERO: Self = 0;

    #[inline(always)]
    fn new(x: usize) -> Self {
        x
    }
    #[inline(always)]
    fn index(&self) -> usize {
        *self
    }
    #[inline(always)]
    fn max() -> Self {
        usize::MAX
    }
}

/// Node identifier, an index into the arena.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeIndex<Ix = DefaultIx>(Ix);

impl<Ix: IndexType> NodeIndex<Ix> {
    /// The arena slot holding the shared sentinel leaf.
    pub const SENTINEL: Self = NodeIndex(Ix::ZERO);

    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    /// The largest representable index, used as the exhaustion marker.
    #[inline]
    pub fn end() -> Self {
        NodeIndex(IndexType::max())
    }
}

impl<Ix: fmt::Debug> fmt::Debug for NodeIndex<Ix> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NodeIndex({:?})", self.0)
    }
}
