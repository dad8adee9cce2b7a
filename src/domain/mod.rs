pub mod chart;
pub mod errors;
pub mod graph;
pub mod logging;
