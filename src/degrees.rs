//! Degrees-of-separation search over a bipartite person/movie graph

pub mod graph;
pub mod loader;
pub mod search;

pub use graph::{Graph, Movie, MovieId, Person, PersonId};
pub use search::shortest_path;
