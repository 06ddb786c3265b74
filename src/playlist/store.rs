use std::fmt;

use tracing::{debug, warn};

use crate::config::PlaylistSettings;
use crate::track::Track;

use super::error::PlaylistError;

/// An ordered list of borrowed tracks whose capacity is fixed at creation.
///
/// Slots `0..size` always hold a track and slots `size..capacity` are always
/// empty. The slot buffer is allocated once and never grows; the tracks
/// themselves are owned by the caller.
#[derive(Debug)]
pub struct PlayList<'a, T> {
    slots: Box<[Option<&'a T>]>,
    size: usize,
}

impl<T> Clone for PlayList<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            size: self.size,
        }
    }
}

impl<'a, T> PlayList<'a, T> {
    /// Create an empty playlist. A capacity of zero is allowed and accepts nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
            size: 0,
        }
    }

    /// Create an empty playlist sized by `settings`. Run
    /// [`Settings::validate`](crate::config::Settings::validate) first; an
    /// unchecked capacity is allocated as-is.
    pub fn with_settings(settings: &PlaylistSettings) -> Self {
        Self::new(settings.capacity)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    /// The track at `index`, or `None` when `index >= size()`.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        if index < self.size {
            self.slots[index]
        } else {
            None
        }
    }

    /// Tracks in list order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> {
        self.slots[..self.size].iter().flatten().copied()
    }

    /// Remove the track at `index`, moving every later track one slot toward
    /// the front. Out-of-range indices leave the playlist untouched.
    pub fn remove(&mut self, index: usize) -> Option<&'a T> {
        if index >= self.size {
            return None;
        }

        let removed = self.slots[index];
        self.slots[index..self.size].rotate_left(1);
        self.size -= 1;
        self.slots[self.size] = None;
        removed
    }

    pub fn remove_first(&mut self) -> Option<&'a T> {
        self.remove(0)
    }

    /// Remove the last track, freeing its slot and shrinking `size()` by one.
    pub fn remove_last(&mut self) -> Option<&'a T> {
        let last = self.size.checked_sub(1)?;
        self.remove(last)
    }
}

impl<'a, T: Track> PlayList<'a, T> {
    /// Append `track` after the last occupied slot.
    pub fn push(&mut self, track: &'a T) -> Result<(), PlaylistError> {
        if self.is_full() {
            debug!(
                capacity = self.capacity(),
                title = track.title(),
                "playlist full, track not appended"
            );
            return Err(PlaylistError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        self.slots[self.size] = Some(track);
        self.size += 1;
        Ok(())
    }

    /// Insert `track` at `index` (`0..=size()`), moving the tracks at and after
    /// `index` one slot toward the end.
    pub fn insert(&mut self, index: usize, track: &'a T) -> Result<(), PlaylistError> {
        if self.is_full() {
            debug!(
                capacity = self.capacity(),
                index,
                title = track.title(),
                "playlist full, track not inserted"
            );
            return Err(PlaylistError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        if index > self.size {
            debug!(index, size = self.size, "insert index out of range");
            return Err(PlaylistError::InvalidIndex {
                index,
                size: self.size,
            });
        }

        // slots[size] is the free slot that rotates down into `index`.
        self.slots[index..=self.size].rotate_right(1);
        self.slots[index] = Some(track);
        self.size += 1;
        Ok(())
    }

    /// Append every track of `other`, in order. Either all of them fit or
    /// nothing is appended.
    pub fn append(&mut self, other: &PlayList<'a, T>) -> Result<(), PlaylistError> {
        let combined = self.size + other.size;
        if combined > self.capacity() {
            debug!(
                capacity = self.capacity(),
                size = self.size,
                incoming = other.size,
                "not enough room to append playlist"
            );
            return Err(PlaylistError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        self.slots[self.size..combined].copy_from_slice(&other.slots[..other.size]);
        self.size = combined;
        Ok(())
    }

    /// Push tracks until the playlist is full. Returns how many were taken;
    /// anything left over is dropped.
    pub fn fill_from<I>(&mut self, tracks: I) -> usize
    where
        I: IntoIterator<Item = &'a T>,
    {
        let mut taken = 0;
        for track in tracks {
            if self.push(track).is_err() {
                warn!(
                    capacity = self.capacity(),
                    taken, "playlist filled to capacity, remaining tracks dropped"
                );
                break;
            }
            taken += 1;
        }
        taken
    }

    /// Index of the first track whose title equals `title`, ignoring case.
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.iter().position(|track| titles_match(track.title(), title))
    }

    /// Remove the first track whose title matches `title` (see [`index_of`](Self::index_of)).
    pub fn remove_by_title(&mut self, title: &str) -> Option<&'a T> {
        let index = self.index_of(title)?;
        self.remove(index)
    }

    /// Sum of all durations, in seconds.
    pub fn total_duration(&self) -> u64 {
        self.iter().map(|track| u64::from(track.duration())).sum()
    }

    /// Index of the shortest track in `start..size()`; the lowest index wins
    /// a tie. `None` when `start` is out of range.
    pub fn index_of_shortest(&self, start: usize) -> Option<usize> {
        if start >= self.size {
            return None;
        }

        self.iter()
            .enumerate()
            .skip(start)
            .min_by_key(|(_, track)| track.duration())
            .map(|(index, _)| index)
    }

    pub fn title_of_shortest(&self) -> Option<&'a str> {
        let index = self.index_of_shortest(0)?;
        self.get(index).map(|track| track.title())
    }

    /// Order tracks by increasing duration using selection sort. Tracks of
    /// equal duration keep their relative order.
    pub fn sort_by_duration(&mut self) {
        for i in 0..self.size {
            if let Some(shortest) = self.index_of_shortest(i) {
                // Rotate rather than swap: the displaced run stays in order.
                self.slots[i..=shortest].rotate_right(1);
            }
        }
    }
}

impl<T: Track> fmt::Display for PlayList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for track in self.iter() {
            writeln!(f, "{track}")?;
        }
        Ok(())
    }
}

/// Same length in chars, and equal char-by-char once lowercased. An empty
/// query matches nothing.
fn titles_match(a: &str, b: &str) -> bool {
    !b.is_empty()
        && a.chars().count() == b.chars().count()
        && a
            .chars()
            .zip(b.chars())
            .all(|(x, y)| x.to_lowercase().eq(y.to_lowercase()))
}
