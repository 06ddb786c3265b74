//! Fixed-capacity playlist.
//!
//! `PlayList` lives in `playlist::store`; the failures its mutations can
//! report live in `playlist::error`.

mod error;
mod store;

pub use error::PlaylistError;
pub use store::PlayList;
