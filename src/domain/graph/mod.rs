//! Агрегат графика стратегии: параметры, ключи запросов и серии.

pub mod entities;
pub mod params;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use params::*;
pub use repositories::*;
pub use value_objects::*;
