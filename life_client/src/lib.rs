// lib.rs - Desktop client for Conway's Game of Life
//
// The client owns the grid and draws it; each generation is computed by a
// remote step server and swapped in when the response arrives.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod session;
pub mod step;

pub use app::LifeApp;
pub use config::ClientConfig;
pub use session::Session;
