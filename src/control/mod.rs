pub mod engine;
pub mod wall;
