//! Emitting reachable values, one per line.

use std::fmt::Display;
use std::io::{self, Write};

use super::dfs::Dfs;
use crate::log::trace_walk;
use crate::{GraphToken, Vertex};

/// Writes the value of every vertex reachable from `start` to `out`.
///
/// Each value appears exactly once, on its own line, in its `Display` form,
/// in DFS pre-order. An absent start writes nothing.
///
/// # Errors
/// Returns the first I/O error raised by `out`; output already written stays.
pub fn write_vertex_vals<'g, 'brand, T, W>(
    token: &GraphToken<'brand>,
    start: Option<&'g Vertex<'g, 'brand, T>>,
    out: &mut W,
) -> io::Result<()>
where
    T: Display,
    W: Write + ?Sized,
{
    let mut walk = Dfs::new(token, start);
    for vertex in walk.by_ref() {
        writeln!(out, "{}", vertex.data())?;
    }
    trace_walk!(
        op = "print_vertex_vals",
        lines = walk.visited_count(),
        "printed reachable values"
    );
    Ok(())
}

/// Prints the value of every vertex reachable from `start` to standard output.
///
/// Standard output is line-buffered, so each value is flushed as its line
/// completes.
///
/// # Errors
/// Returns the I/O error if standard output cannot be written.
pub fn print_vertex_vals<'g, 'brand, T: Display>(
    token: &GraphToken<'brand>,
    start: Option<&'g Vertex<'g, 'brand, T>>,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_vertex_vals(token, start, &mut out)
}

/// Returns the payloads of every vertex reachable from `start`, in DFS pre-order.
pub fn reachable_values<'g, 'brand, T>(
    token: &GraphToken<'brand>,
    start: Option<&'g Vertex<'g, 'brand, T>>,
) -> Vec<&'g T> {
    Dfs::new(token, start).map(Vertex::data).collect()
}
