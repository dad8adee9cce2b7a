pub mod query_cache;
pub mod use_cases;

pub use query_cache::*;
pub use use_cases::*;
