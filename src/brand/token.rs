//! `GraphToken` - the capability that authorizes edge access.
//!
//! ## Core invariant (linearity)
//!
//! `GraphToken<'brand>` is **not** `Copy`/`Clone`. Every safe path to
//! `&mut` edge storage goes through `&mut GraphToken<'brand>`, and the borrow
//! checker forbids two live mutable borrows of one token, so edge lists are
//! never aliased mutably.

use super::invariant::InvariantLifetime;

/// A zero-sized token that controls access to the [`EdgeCell`](super::EdgeCell)s
/// of one graph scope.
#[derive(Debug)]
pub struct GraphToken<'brand>(InvariantLifetime<'brand>);

impl<'brand> GraphToken<'brand> {
    /// Creates a fresh brand and runs `f` with its token.
    ///
    /// Vertices created inside `f` can only be wired and traversed with this
    /// token; neither the token nor the vertices can escape the closure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vertex_dfs::{GraphToken, Vertex};
    ///
    /// let degree = GraphToken::new(|mut token| {
    ///     let a = Vertex::new(1);
    ///     let b = Vertex::new(2);
    ///     a.add_neighbor(&mut token, &b);
    ///     a.out_degree(&token)
    /// });
    /// assert_eq!(degree, 1);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GraphToken<'new_brand>) -> R,
    {
        f(GraphToken(InvariantLifetime::new()))
    }

    /// Runs `f` in a brand nested inside this one.
    ///
    /// Useful for scratch graphs built while another graph is alive: the two
    /// brands never unify.
    #[inline(always)]
    pub fn with_scoped<F, R>(&self, f: F) -> R
    where
        F: for<'sub> FnOnce(GraphToken<'sub>) -> R,
    {
        GraphToken::new(f)
    }
}

// SAFETY: the token carries no data. Sharing `&GraphToken` across threads only
// enables token-gated reads, which `EdgeCell`'s own `Sync` bound constrains.
unsafe impl<'brand> Sync for GraphToken<'brand> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_zero_sized() {
        assert_eq!(core::mem::size_of::<GraphToken<'static>>(), 0);
    }

    #[test]
    fn scopes_return_closure_result() {
        let out = GraphToken::new(|token| token.with_scoped(|_inner| 7));
        assert_eq!(out, 7);
    }
}
