//! バックエンドAPIクライアント

mod client;

pub use client::{fetch_details_by_title, search_by_image};
