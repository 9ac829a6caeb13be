//! Parallel client trait impls (pure delegation).

mod connectivity;
mod mst;
