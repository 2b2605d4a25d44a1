//! Step server for the Game of Life client.
//!
//! Each `POST /game` carries one full generation and gets the next one
//! back. Nothing is remembered between requests.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
