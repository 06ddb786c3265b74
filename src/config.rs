//! Configuration loader and schema types.
//!
//! Settings decide how large new playlists are. They come from an optional
//! TOML file and `TRACKLIST__` environment variables.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;
