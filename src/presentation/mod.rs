pub mod controls;
pub mod wasm_api;
