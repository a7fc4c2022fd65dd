mod app;
mod cli;
mod config;
pub use app::*;
pub use cli::*;
pub use config::*;
pub mod errors;
pub mod report;
pub mod transfer;
