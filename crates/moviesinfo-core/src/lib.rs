pub mod config;
pub mod logging;

pub mod client;
pub mod error;
pub mod movie_info;
pub mod retry;

pub use client::{MovieInfoClient, Timeouts};
pub use error::FetchError;
pub use movie_info::MovieInfo;
