pub mod client;
pub mod models;

pub use client::RedditClient;
pub use models::{AboutData, FetchError};
