//! Branding primitives that gate access to a graph's edge lists.
//!
//! A vertex graph is built and read inside one `GraphToken::new` scope. The
//! scope's lifetime brands every [`EdgeCell`] created in it:
//! - reading edges requires `&GraphToken<'brand>`
//! - adding edges requires `&mut GraphToken<'brand>`
//!
//! Because the token is linear, no edge list can change while any traversal
//! holds a shared borrow of the token.

mod cell;
mod invariant;
mod macros;
mod token;

pub use cell::EdgeCell;
pub use invariant::InvariantLifetime;
pub use token::GraphToken;
