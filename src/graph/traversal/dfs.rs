//! Pre-order depth-first iterator over the vertices reachable from a start.

use crate::graph::access::visited::VisitedSet;
use crate::{GraphToken, Vertex};

/// An iterator for Depth-First Search (DFS).
///
/// Yields every vertex reachable from the start exactly once, in the same
/// pre-order a recursive DFS produces: a vertex is yielded before any of its
/// descendants, and siblings follow edge insertion order.
///
/// The walk is driven by an explicit stack, so its depth is bounded by heap
/// memory rather than the call stack. Each iterator owns its visited set.
pub struct Dfs<'t, 'g, 'brand, T> {
    token: &'t GraphToken<'brand>,
    visited: VisitedSet,
    stack: Vec<&'g Vertex<'g, 'brand, T>>,
}

impl<'t, 'g, 'brand, T> Dfs<'t, 'g, 'brand, T> {
    /// Creates a DFS iterator starting from `start`.
    ///
    /// An absent start yields nothing.
    pub fn new(token: &'t GraphToken<'brand>, start: Option<&'g Vertex<'g, 'brand, T>>) -> Self {
        Self {
            token,
            visited: VisitedSet::new(),
            stack: start.into_iter().collect(),
        }
    }

    /// Returns how many distinct vertices have been yielded so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

impl<'t, 'g, 'brand, T> Iterator for Dfs<'t, 'g, 'brand, T> {
    type Item = &'g Vertex<'g, 'brand, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.token;
        loop {
            let vertex = self.stack.pop()?;
            if !self.visited.try_visit(vertex) {
                continue;
            }

            // Reverse push so the first neighbor is popped first.
            for &next in vertex.neighbors(token).iter().rev() {
                if !self.visited.is_visited(next) {
                    self.stack.push(next);
                }
            }
            return Some(vertex);
        }
    }
}

impl<T> core::iter::FusedIterator for Dfs<'_, '_, '_, T> {}

/// Starts a pre-order DFS from `start`.
pub fn dfs<'t, 'g, 'brand, T>(
    token: &'t GraphToken<'brand>,
    start: Option<&'g Vertex<'g, 'brand, T>>,
) -> Dfs<'t, 'g, 'brand, T> {
    Dfs::new(token, start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_recursive_preorder() {
        GraphToken::new(|mut token| {
            // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3 ; 3 -> (none)
            let v = [Vertex::new(0), Vertex::new(1), Vertex::new(2), Vertex::new(3)];
            v[0].connect_all(&mut token, [&v[1], &v[2]]);
            v[1].add_neighbor(&mut token, &v[3]);
            v[2].add_neighbor(&mut token, &v[3]);

            let order: Vec<i32> = dfs(&token, Some(&v[0])).map(|x| *x.data()).collect();
            assert_eq!(order, vec![0, 1, 3, 2]);
        });
    }

    #[test]
    fn cycle_terminates_and_counts_each_vertex_once() {
        GraphToken::new(|mut token| {
            let a = Vertex::new("a");
            let b = Vertex::new("b");
            a.add_neighbor(&mut token, &b);
            b.add_neighbor(&mut token, &a);
            b.add_neighbor(&mut token, &b);

            let mut walk = dfs(&token, Some(&a));
            assert_eq!(walk.by_ref().count(), 2);
            assert_eq!(walk.visited_count(), 2);
            assert!(walk.next().is_none());
        });
    }

    #[test]
    fn absent_start_is_empty() {
        GraphToken::new(|token| {
            let mut walk = dfs::<u32>(&token, None);
            assert!(walk.next().is_none());
        });
    }
}
