//! A fixed-capacity, ordered list of tracks.
//!
//! [`PlayList`] keeps borrowed handles to tracks owned elsewhere, in
//! caller-determined order, inside a buffer whose length is fixed when the
//! playlist is created. Tracks are anything implementing [`Track`];
//! [`SimpleTrack`] is a plain in-memory one.

pub mod config;
pub mod playlist;
pub mod track;

pub use playlist::{PlayList, PlaylistError};
pub use track::{SimpleTrack, Track};
