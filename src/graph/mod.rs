pub mod generators;
pub mod traits;
pub mod unweighted;
pub mod weighted;

pub use traits::{Direction, Graph, MutableGraph};
pub use unweighted::UnweightedGraph;
pub use weighted::{WeightedEdge, WeightedGraph};
