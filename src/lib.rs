//! Turns whatever a user pastes (a watch link, a youtu.be short link, a
//! shorts URL or a bare video ID) into one canonical YouTube URL, and opens
//! it with the first handler that will take it.

pub mod commands;
pub mod launcher;
pub mod models;
pub mod paths;
pub mod store;
pub mod youtube;

pub use youtube::{CanonicalUrl, HostPolicy, Rejected, VideoId, normalize, normalize_with};
