//! Traversals specialized to primitive integer payloads.

use num_traits::PrimInt;

use super::dfs::Dfs;
use crate::log::trace_walk;
use crate::{GraphToken, Vertex};

/// Returns the largest payload among the vertices reachable from `start`.
///
/// An absent start returns `T::min_value()` (`i32::MIN` for `i32`). That
/// sentinel is indistinguishable from a graph whose maximum really is the
/// minimum value; callers that need to tell them apart should check the
/// start for `None` themselves.
pub fn max<'g, 'brand, T: PrimInt>(
    token: &GraphToken<'brand>,
    start: Option<&'g Vertex<'g, 'brand, T>>,
) -> T {
    let mut walk = Dfs::new(token, start);
    let best = walk
        .by_ref()
        .map(|v| *v.data())
        .fold(T::min_value(), |best, value| best.max(value));
    trace_walk!(op = "max", visited = walk.visited_count());
    best
}

/// Returns `true` iff every vertex reachable from `start` holds an odd value.
///
/// Negative values are odd when not divisible by two. The walk stops at the
/// first even value. An absent start is vacuously `true`.
pub fn all_odd<'g, 'brand, T: PrimInt>(
    token: &GraphToken<'brand>,
    start: Option<&'g Vertex<'g, 'brand, T>>,
) -> bool {
    let two = T::one() + T::one();
    let mut walk = Dfs::new(token, start);
    let odd = walk.by_ref().all(|v| *v.data() % two != T::zero());
    trace_walk!(op = "all_odd", visited = walk.visited_count(), odd);
    odd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_sees_values_behind_cycles() {
        GraphToken::new(|mut token| {
            let a = Vertex::new(4);
            let b = Vertex::new(-2);
            let c = Vertex::new(17);
            a.add_neighbor(&mut token, &b);
            b.connect_all(&mut token, [&a, &c]);

            assert_eq!(max(&token, Some(&a)), 17);
            assert_eq!(max(&token, Some(&c)), 17);
        });
    }

    #[test]
    fn max_of_absent_start_is_min_value() {
        GraphToken::new(|token| {
            assert_eq!(max::<i32>(&token, None), i32::MIN);
            assert_eq!(max::<u8>(&token, None), 0);
        });
    }

    #[test]
    fn all_odd_handles_negative_values() {
        GraphToken::new(|mut token| {
            let a = Vertex::new(-3);
            let b = Vertex::new(7);
            let c = Vertex::new(-4);
            a.add_neighbor(&mut token, &b);
            assert!(all_odd(&token, Some(&a)));

            b.add_neighbor(&mut token, &c);
            assert!(!all_odd(&token, Some(&a)));
        });
    }

    #[test]
    fn all_odd_is_vacuous_without_start() {
        GraphToken::new(|token| {
            assert!(all_odd::<i64>(&token, None));
        });
    }

    #[test]
    fn all_odd_ignores_unreachable_evens() {
        GraphToken::new(|mut token| {
            let a = Vertex::new(1);
            let even = Vertex::new(2);
            even.add_neighbor(&mut token, &a);
            assert!(all_odd(&token, Some(&a)));
            assert!(!all_odd(&token, Some(&even)));
        });
    }
}
