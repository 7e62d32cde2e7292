pub mod dialect;
pub mod engine;
pub mod normalize;
pub mod resolver;
pub mod store;
pub mod types;
pub mod vocab;
