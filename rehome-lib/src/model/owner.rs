//! Current-owner records.

use serde::{Deserialize, Serialize};

/// The person a dog currently lives with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    /// Short bio line shown under the owner's name.
    pub bio: String,
    /// Bundled image asset name.
    pub image: String,
}

impl Owner {
    /// Creates an owner record.
    pub fn new(name: impl Into<String>, bio: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bio: bio.into(),
            image: image.into(),
        }
    }
}
