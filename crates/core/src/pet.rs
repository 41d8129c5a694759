//! Pet categories offered in the signup and waitlist-completion forms.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Pet type selected by a waitlist signup.
///
/// Stored in the database as the lowercase `name()` value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    /// Default for provider-created entries (OAuth signups pick a pet later).
    #[default]
    Dog,
    Cat,
    Bird,
    Rabbit,
    Other,
}

impl PetType {
    /// Parse from the database / form value.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            "bird" => Ok(Self::Bird),
            "rabbit" => Ok(Self::Rabbit),
            "other" => Ok(Self::Other),
            other => Err(CoreError::Validation(format!(
                "Unknown pet type '{other}'. Must be one of: dog, cat, bird, rabbit, other"
            ))),
        }
    }

    /// Database / wire value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Bird => "bird",
            Self::Rabbit => "rabbit",
            Self::Other => "other",
        }
    }

    /// Display label as shown in the signup form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dog => "🐕 Dog",
            Self::Cat => "🐱 Cat",
            Self::Bird => "🦜 Bird",
            Self::Rabbit => "🐰 Rabbit",
            Self::Other => "🐾 Other",
        }
    }
}
