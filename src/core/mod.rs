pub mod cli;
pub mod context;
pub mod directory;
pub mod models;
pub mod snapshot;
pub mod types;
