pub mod cancellation;
pub mod colour_map;
pub mod data;
pub mod engine;
pub mod sampler;
pub mod viewport_controller;
