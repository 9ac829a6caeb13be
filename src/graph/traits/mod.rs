pub mod connectivity;
pub mod mst;
pub mod types;

pub use connectivity::ConnectivityAlgorithms;
pub use mst::MSTAlgorithms;
pub use types::*;
