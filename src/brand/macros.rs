/// Opens a graph scope; sugar over [`GraphToken::new`](crate::GraphToken::new).
///
/// ```rust
/// use vertex_dfs::{graph_scope, Vertex};
///
/// let leaf = graph_scope! { |token| {
///     let v = Vertex::new(3);
///     v.is_leaf(&token)
/// }};
/// assert!(leaf);
/// ```
///
/// A nested scope can be opened from an existing token:
///
/// ```rust
/// use vertex_dfs::graph_scope;
///
/// graph_scope! { |outer| {
///     graph_scope! { |inner| in outer {
///         let _ = inner;
///     }}
/// }}
/// ```
#[macro_export]
macro_rules! graph_scope {
    (|$sub_token:ident| in $token:ident, $body:expr) => {
        $token.with_scoped(|$sub_token| $body)
    };
    (|$sub_token:ident| in $token:ident $body:block) => {
        $token.with_scoped(|$sub_token| $body)
    };
    (|$token:ident| $body:expr) => {
        $crate::GraphToken::new(|$token| $body)
    };
    (|$token:ident| $body:block) => {
        $crate::GraphToken::new(|$token| $body)
    };
}
