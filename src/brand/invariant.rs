use core::marker::PhantomData;

/// A marker that is invariant in `'id`.
///
/// Brands must not shrink or grow through subtyping, otherwise two graph
/// scopes could be unified and cells from one read with the other's token.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct InvariantLifetime<'id>(PhantomData<fn(&'id ()) -> &'id ()>);

impl<'id> InvariantLifetime<'id> {
    /// Creates a new invariant lifetime marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
