pub mod bfs;
pub mod frontier;
pub mod neighbors;

// Re-export the public functions
pub use bfs::{PathResult, PathStep, bfs_find_path};
pub use frontier::{Frontier, SearchNode};
pub use neighbors::neighbors_for_person;
