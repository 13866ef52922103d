pub mod parsing;
pub mod pathfinding;
pub mod string_normalization;

// Re-export commonly used items
pub use parsing::{Catalog, CatalogError, Film, Person, parse_catalog};
pub use pathfinding::{
    Frontier, PathResult, PathStep, SearchNode, bfs_find_path, neighbors_for_person,
};
