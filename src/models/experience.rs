use serde::{Deserialize, Serialize};

/// An island activity shown on the storefront. Not bookable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Experience {
    pub title: String,
    pub description: String,
    pub image: String,
}

impl Experience {
    pub fn new(title: &str, description: &str, image: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceCatalog {
    experiences: Vec<Experience>,
}

impl ExperienceCatalog {
    pub fn new(experiences: Vec<Experience>) -> Self {
        Self { experiences }
    }

    pub fn all(&self) -> &[Experience] {
        &self.experiences
    }
}

impl Default for ExperienceCatalog {
    fn default() -> Self {
        Self::new(vec![
            Experience::new(
                "Snorkeling Safari",
                "Explore vibrant coral reefs and swim with sea turtles.",
                "https://picsum.photos/600/400?random=20",
            ),
            Experience::new(
                "Sandbank Picnic",
                "A private lunch on a secluded patch of white sand.",
                "https://picsum.photos/600/400?random=21",
            ),
            Experience::new(
                "Dolphin Watching",
                "Watch playful dolphins jump in the sunset glow.",
                "https://picsum.photos/600/400?random=22",
            ),
            Experience::new(
                "Island Hopping",
                "Visit neighboring islands and learn about local life.",
                "https://picsum.photos/600/400?random=23",
            ),
        ])
    }
}
