//! Агрегат графика: декларативный вход рендерера из серий.

pub mod services;
pub mod value_objects;

pub use services::*;
pub use value_objects::*;
