//! `EdgeCell` - token-gated interior mutability for edge storage.
//!
//! ## Safety invariant
//!
//! For a fixed `'brand`, the only safe way to obtain `&mut T` is through
//! `&mut GraphToken<'brand>`. Shared reads are tied to `&GraphToken<'brand>`.
//! Since the token is linear, safe code cannot hold `&T` and `&mut T` to the
//! same cell at once.

use core::{cell::UnsafeCell, marker::PhantomData};

use super::GraphToken;

/// A branded cell readable with `&GraphToken<'brand>` and writable with
/// `&mut GraphToken<'brand>`.
#[repr(transparent)]
pub struct EdgeCell<'brand, T: ?Sized> {
    brand: PhantomData<&'brand mut ()>,
    value: UnsafeCell<T>,
}

impl<'brand, T> EdgeCell<'brand, T> {
    /// Creates a new cell containing `value`.
    pub const fn new(value: T) -> Self {
        Self {
            brand: PhantomData,
            value: UnsafeCell::new(value),
        }
    }

    /// Consumes the cell and returns the contained value.
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

impl<'brand, T: ?Sized> EdgeCell<'brand, T> {
    /// Borrows the contents immutably.
    #[inline(always)]
    pub fn borrow<'a>(&'a self, _token: &'a GraphToken<'brand>) -> &'a T {
        // SAFETY: `&mut T` is only reachable through `&mut GraphToken<'brand>`,
        // which cannot coexist with the `&GraphToken<'brand>` held here.
        unsafe { &*self.value.get() }
    }

    /// Borrows the contents mutably.
    #[inline(always)]
    pub fn borrow_mut<'a>(&'a self, _token: &'a mut GraphToken<'brand>) -> &'a mut T {
        // SAFETY: exclusivity is proven by `&mut GraphToken<'brand>`.
        unsafe { &mut *self.value.get() }
    }

    /// Returns a mutable reference without a token; requires unique ownership.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }
}

impl<'brand, T: Default> Default for EdgeCell<'brand, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

// SAFETY: moving the cell does not grant access to its contents; access still
// needs the branded token.
unsafe impl<'brand, T: ?Sized + Send> Send for EdgeCell<'brand, T> {}

// SAFETY: the only shared access yields `&T`, which is thread-safe iff `T: Sync`.
unsafe impl<'brand, T: ?Sized + Sync> Sync for EdgeCell<'brand, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrow_and_mutate_through_token() {
        GraphToken::new(|mut token| {
            let cell = EdgeCell::new(vec![1, 2]);
            cell.borrow_mut(&mut token).push(3);
            assert_eq!(cell.borrow(&token), &[1, 2, 3]);
        });
    }

    #[test]
    fn get_mut_and_into_inner_skip_the_token() {
        let mut cell: EdgeCell<'_, Vec<u8>> = EdgeCell::default();
        cell.get_mut().push(9);
        assert_eq!(cell.into_inner(), vec![9]);
    }
}
