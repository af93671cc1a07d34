pub mod api;
pub mod client;

#[cfg(test)]
mod tests;

pub use client::TmdbClient;
