//! Connection flattening.
//!
//! Upstream lists arrive either as a flat `nodes` list or an edge-wrapped
//! `edges` list, and the field itself may be absent. Everything downstream
//! works on plain ordered `Vec`s, so the shape is reconciled exactly once,
//! here.

use crate::raw::RawConnection;

/// Flatten a possibly-absent connection into an ordered list.
///
/// Priority order, first match wins: absent input yields an empty list; a
/// `nodes` list is returned unchanged; an `edges` list yields one element
/// per edge's `node`, preserving edge order (edges without a node are
/// dropped). Anything else degrades to empty. Never errors.
pub fn flatten<T>(connection: Option<RawConnection<T>>) -> Vec<T> {
    match connection {
        Some(RawConnection {
            nodes: Some(nodes), ..
        }) => nodes,
        Some(RawConnection {
            edges: Some(edges), ..
        }) => edges.into_iter().filter_map(|edge| edge.node).collect(),
        _ => Vec::new(),
    }
}

/// Length of the raw list behind a connection, before any flattening.
///
/// Collection asset counts default to this number, which is defined on the
/// raw representation rather than on the flattened output.
pub fn raw_len<T>(connection: Option<&RawConnection<T>>) -> usize {
    match connection {
        Some(RawConnection {
            nodes: Some(nodes), ..
        }) => nodes.len(),
        Some(RawConnection {
            edges: Some(edges), ..
        }) => edges.len(),
        _ => 0,
    }
}
