//! Adoptable dog records.

use serde::{Deserialize, Serialize};

use super::Owner;

/// A dog's gender as shown on the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

/// One adoptable dog.
///
/// Records are fixed at load time; nothing mutates them over the life
/// of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    /// Identifier unique within a catalog.
    pub id: u32,
    pub name: String,
    pub gender: Gender,
    pub location: String,
    /// Age in years.
    pub age: u8,
    pub color: String,
    /// Weight in kilograms.
    pub weight: f32,
    /// The "my story" blurb on the detail screen.
    pub about: String,
    /// Bundled image asset name.
    pub image: String,
    pub owner: Owner,
}

impl Dog {
    /// Age formatted for the detail screen's quick-info card.
    pub fn age_label(&self) -> String {
        format!("{} yrs", self.age)
    }

    /// Weight formatted for the detail screen's quick-info card.
    pub fn weight_label(&self) -> String {
        format!("{} Kg", self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spike() -> Dog {
        Dog {
            id: 0,
            name: "Spike".into(),
            gender: Gender::Male,
            location: "Portland, OR".into(),
            age: 3,
            color: "Brown".into(),
            weight: 24.0,
            about: "A good boy.".into(),
            image: "spike.png".into(),
            owner: Owner::new("Robin", "Foster carer", "robin.png"),
        }
    }

    #[test]
    fn test_gender_display() {
        assert_eq!(Gender::Male.to_string(), "Male");
        assert_eq!(Gender::Female.to_string(), "Female");
    }

    #[test]
    fn test_quick_info_labels() {
        let dog = spike();
        assert_eq!(dog.age_label(), "3 yrs");
        assert_eq!(dog.weight_label(), "24 Kg");
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let dog = spike();
        let json = serde_json::to_string(&dog).unwrap();
        let back: Dog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dog);
    }
}
