use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomType {
    #[serde(rename = "Deluxe Room")]
    Deluxe,
    #[serde(rename = "Ocean View Suite")]
    OceanView,
    #[serde(rename = "Garden Villa")]
    GardenVilla,
    #[serde(rename = "Family Suite")]
    FamilySuite,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Deluxe,
        RoomType::OceanView,
        RoomType::GardenVilla,
        RoomType::FamilySuite,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Deluxe => "Deluxe Room",
            RoomType::OceanView => "Ocean View Suite",
            RoomType::GardenVilla => "Garden Villa",
            RoomType::FamilySuite => "Family Suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoomTypeError(pub String);

impl fmt::Display for ParseRoomTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown room type: {}", self.0)
    }
}

impl std::error::Error for ParseRoomTypeError {}

impl FromStr for RoomType {
    type Err = ParseRoomTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        RoomType::ALL
            .into_iter()
            .find(|room_type| room_type.label() == label)
            .ok_or_else(|| ParseRoomTypeError(label.to_string()))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub max_occupancy: u32,
    pub description: String,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    /// Nightly price covering two adults and no children
    pub base_rate: f64,
    pub total_rooms: u32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RoomInput {
    #[validate(length(min = 1, message = "Room name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    #[validate(range(min = 1))]
    pub max_occupancy: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub image_url: Option<String>,
    #[validate(range(min = 0.0))]
    pub base_rate: f64,
    #[validate(range(min = 1))]
    pub total_rooms: u32,
}

impl RoomInput {
    pub fn into_room(self, id: String) -> Room {
        let amenities = self
            .amenities
            .iter()
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
            .map(String::from)
            .collect();

        Room {
            id,
            name: self.name,
            room_type: self.room_type,
            max_occupancy: self.max_occupancy,
            description: self.description,
            amenities,
            images: self.image_url.into_iter().collect(),
            base_rate: self.base_rate,
            total_rooms: self.total_rooms,
        }
    }
}
