//! Graph connectivity and minimum spanning networks.
//!
//! This module provides:
//! - Disjoint sets (union-find with path compression and union by rank)
//! - Minimum spanning tree / forest (Kruskal)
//! - Connectivity (connected components)
//! - Verification of spanning forests by independent traversal
//!
//! ```text
//! graph/
//! ├── mod.rs                # Exports only
//! ├── error.rs              # GraphError / GraphResult
//! ├── validation.rs         # Input validation helpers
//! ├── verify.rs             # Result verification
//! ├── union_find/           # UnionFind, LabeledUnionFind
//! ├── traits/               # Algorithm trait definitions and types
//! ├── impl_generic/         # Generic implementations (written once)
//! ├── serial/               # SerialClient trait impl (pure delegation)
//! └── parallel/             # ParallelClient trait impl (pure delegation)
//! ```

mod error;
pub mod impl_generic;
mod serial;
pub mod traits;
pub mod union_find;
mod validation;
pub mod verify;

#[cfg(feature = "parallel")]
mod parallel;

pub use error::{GraphError, GraphResult};
pub use traits::*;
pub use union_find::{LabeledUnionFind, UnionFind};
