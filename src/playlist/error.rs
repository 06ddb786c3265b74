use thiserror::Error;

/// Why a playlist mutation was rejected. The playlist is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaylistError {
    /// No free slot, or not enough free slots for the whole batch.
    #[error("playlist is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("index {index} is out of range for a playlist of {size} tracks")]
    InvalidIndex { index: usize, size: usize },
}
