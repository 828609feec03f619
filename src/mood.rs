//! The mood registry.
//!
//! Moods are a closed set: each one carries a display label, a storage
//! identifier, and the transition effect its quotes animate with. Untyped
//! mood identifiers only exist at the storage boundary, where parsing an
//! unknown one is an error the caller ignores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Available moods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Happy,
    Sad,
    Angry,
    Chill,
    Savage,
    Istarii,
    Dark,
}

/// Error returned when a stored mood identifier is not in the registry
#[derive(Debug, Error)]
#[error("unknown mood: {0}")]
pub struct UnknownMood(String);

impl Mood {
    /// All moods, in selector display order
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Chill,
        Mood::Savage,
        Mood::Istarii,
        Mood::Dark,
    ];

    /// Display label shown in the mood badge and selector
    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Chill => "Chill",
            Mood::Savage => "Savage",
            Mood::Istarii => "Istarii",
            Mood::Dark => "Dark",
        }
    }

    /// Stable identifier used for persistence
    pub fn key(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Chill => "chill",
            Mood::Savage => "savage",
            Mood::Istarii => "istarii",
            Mood::Dark => "dark",
        }
    }

    /// Transition effect applied to the quote display for this mood
    pub fn animation(self) -> Option<Animation> {
        match self {
            Mood::Happy => Some(Animation::Bounce),
            Mood::Sad => Some(Animation::Fade),
            Mood::Angry => Some(Animation::Shake),
            Mood::Chill => Some(Animation::Dissolve),
            Mood::Savage => Some(Animation::Punch),
            Mood::Istarii => Some(Animation::Dissolve),
            Mood::Dark => Some(Animation::Fade),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

/// Transition effects for the quote display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Bounce,
    Fade,
    Shake,
    Dissolve,
    Punch,
}

impl Animation {
    /// All known effects
    pub const ALL: [Animation; 5] = [
        Animation::Bounce,
        Animation::Fade,
        Animation::Shake,
        Animation::Dissolve,
        Animation::Punch,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_mood() {
        for mood in Mood::ALL {
            assert_eq!(mood.key().parse::<Mood>().unwrap(), mood);
        }
    }

    #[test]
    fn parse_rejects_unknown_identifiers() {
        assert!("grumpy".parse::<Mood>().is_err());
        assert!("".parse::<Mood>().is_err());
        assert!("Happy".parse::<Mood>().is_err()); // identifiers are lowercase
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<_> = Mood::ALL.iter().map(|m| m.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Mood::ALL.len());
    }

    #[test]
    fn every_animation_tag_is_registered() {
        for mood in Mood::ALL {
            if let Some(anim) = mood.animation() {
                assert!(Animation::ALL.contains(&anim));
            }
        }
    }

    #[test]
    fn serde_uses_storage_identifiers() {
        let json = serde_json::to_string(&Mood::Istarii).unwrap();
        assert_eq!(json, "\"istarii\"");
        let back: Mood = serde_json::from_str("\"savage\"").unwrap();
        assert_eq!(back, Mood::Savage);
    }
}
