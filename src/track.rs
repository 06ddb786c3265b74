use std::fmt;

/// The view of a track a [`PlayList`](crate::PlayList) needs.
///
/// The `Display` form is what a playlist prints, one track per line.
pub trait Track: fmt::Display {
    fn title(&self) -> &str;

    /// Length in whole seconds.
    fn duration(&self) -> u32;
}

/// A title and a length, nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleTrack {
    title: String,
    duration: u32,
}

impl SimpleTrack {
    pub fn new(title: impl Into<String>, duration: u32) -> Self {
        Self {
            title: title.into(),
            duration,
        }
    }
}

impl Track for SimpleTrack {
    fn title(&self) -> &str {
        &self.title
    }

    fn duration(&self) -> u32 {
        self.duration
    }
}

impl fmt::Display for SimpleTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, format_duration(u64::from(self.duration)))
    }
}

/// Format seconds as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_duration(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}
