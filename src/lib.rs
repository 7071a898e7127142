pub mod cache;
pub mod client;
pub mod directory;
pub mod handlers;
pub mod inquiries;
pub mod models;

pub use client::UpstreamClient;
