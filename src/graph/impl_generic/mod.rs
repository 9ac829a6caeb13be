//! Generic implementations shared by every client.

mod connected_components;
pub mod helpers;
mod mst;

pub use connected_components::connected_components_impl;
pub use mst::{kruskal_batch_impl, kruskal_impl, labeled_kruskal_impl};
