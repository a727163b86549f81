// Side effects the session hands to the outside world

use std::fmt;

use crate::game::variant::ContentSet;

/// Background music
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Title,
    Battle,
    Boss,
    /// Theme of a chapter (1-based)
    Chapter(u32),
    Victory,
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Battle => f.write_str("battle"),
            Self::Boss => f.write_str("boss"),
            Self::Chapter(number) => write!(f, "chapter {number}"),
            Self::Victory => f.write_str("victory"),
        }
    }
}

/// Something an external sink should react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Switch the background music; `content` picks the soundtrack flavour
    Music {
        track: Track,
        content: Option<ContentSet>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_names() {
        assert_eq!(Track::Title.to_string(), "title");
        assert_eq!(Track::Chapter(3).to_string(), "chapter 3");
        assert_eq!(Track::Boss.to_string(), "boss");
    }
}
