//! Seed records used in place of a real data source.

use crate::catalog::Catalog;
use crate::model::{Dog, Gender, Owner};

/// The sample dog list the app ships with.
pub fn sample_dogs() -> Vec<Dog> {
    vec![
        Dog {
            id: 0,
            name: "Spike".into(),
            gender: Gender::Male,
            location: "Portland, OR".into(),
            age: 3,
            color: "Brown".into(),
            weight: 24.0,
            about: "Spike is a playful labrador mix who loves long walks and \
                    belly rubs. His family is moving abroad and can't take \
                    him along, so he is looking for a new best friend."
                .into(),
            image: "spike.png".into(),
            owner: Owner::new("Priya Raman", "Developer & Pet Lover", "priya.png"),
        },
        Dog {
            id: 1,
            name: "Bella".into(),
            gender: Gender::Female,
            location: "Austin, TX".into(),
            age: 2,
            color: "White".into(),
            weight: 18.5,
            about: "Bella is a gentle soul who gets along with cats, kids and \
                    pretty much everyone she meets. She knows sit, stay and \
                    shake, and would thrive in a calm home."
                .into(),
            image: "bella.png".into(),
            owner: Owner::new("Marcus Webb", "Volunteer at Happy Paws", "marcus.png"),
        },
        Dog {
            id: 2,
            name: "Coco".into(),
            gender: Gender::Female,
            location: "Denver, CO".into(),
            age: 4,
            color: "Black".into(),
            weight: 21.0,
            about: "Coco was found as a stray and nursed back to health. She \
                    is shy at first but fiercely loyal once she trusts you. \
                    Experienced owners preferred."
                .into(),
            image: "coco.png".into(),
            owner: Owner::new("Sofia Alvarez", "Foster carer", "sofia.png"),
        },
        Dog {
            id: 3,
            name: "Max".into(),
            gender: Gender::Male,
            location: "Seattle, WA".into(),
            age: 1,
            color: "Golden".into(),
            weight: 12.5,
            about: "Max is a bouncy golden retriever puppy with endless \
                    energy. He needs a yard to run in and someone patient \
                    enough to finish his training."
                .into(),
            image: "max.png".into(),
            owner: Owner::new("Jordan Lee", "Runner & Dog trainer", "jordan.png"),
        },
        Dog {
            id: 4,
            name: "Luna".into(),
            gender: Gender::Female,
            location: "Chicago, IL".into(),
            age: 6,
            color: "Grey".into(),
            weight: 27.0,
            about: "Luna is a dignified husky who has already raised one \
                    litter and is ready to retire to a couch. She talks back \
                    when she disagrees with you."
                .into(),
            image: "luna.png".into(),
            owner: Owner::new("Ellis Park", "Shelter coordinator", "ellis.png"),
        },
        Dog {
            id: 5,
            name: "Toby".into(),
            gender: Gender::Male,
            location: "Raleigh, NC".into(),
            age: 5,
            color: "Tan".into(),
            weight: 9.0,
            about: "Toby is a small terrier with a big personality. He rings \
                    a bell to go outside and will happily nap in a bag while \
                    you run errands."
                .into(),
            image: "toby.png".into(),
            owner: Owner::new("Amara Okafor", "Retired teacher", "amara.png"),
        },
    ]
}

/// The sample list wrapped in a [`Catalog`].
pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_dogs()).expect("fixture ids are unique")
}
