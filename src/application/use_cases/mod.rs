pub mod load_graph;

pub use load_graph::*;
