use crate::models::content::CmsContent;
use crate::models::room::{Room, RoomType};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn initial_rooms() -> Vec<Room> {
    vec![
        Room {
            id: "room-1".to_string(),
            name: "Beachfront Deluxe".to_string(),
            room_type: RoomType::Deluxe,
            max_occupancy: 2,
            description: "Wake up to the sound of waves in our spacious beachfront deluxe room."
                .to_string(),
            amenities: strings(&[
                "Air Conditioning",
                "En-suite Bathroom",
                "Free Wi-Fi",
                "Coffee Maker",
                "Private Balcony",
            ]),
            images: strings(&["https://picsum.photos/800/600?random=1"]),
            base_rate: 150.0,
            total_rooms: 5,
        },
        Room {
            id: "room-2".to_string(),
            name: "Ocean View Suite".to_string(),
            room_type: RoomType::OceanView,
            max_occupancy: 3,
            description:
                "Panoramic views of the turquoise Indian Ocean from your private sanctuary."
                    .to_string(),
            amenities: strings(&[
                "King Size Bed",
                "Mini Bar",
                "Luxury Toiletries",
                "Flat Screen TV",
                "Day Bed",
            ]),
            images: strings(&["https://picsum.photos/800/600?random=2"]),
            base_rate: 220.0,
            total_rooms: 3,
        },
        Room {
            id: "room-3".to_string(),
            name: "Garden Villa".to_string(),
            room_type: RoomType::GardenVilla,
            max_occupancy: 2,
            description: "Tucked away in lush tropical gardens for ultimate privacy.".to_string(),
            amenities: strings(&[
                "Private Garden Path",
                "Outdoor Shower",
                "Queen Bed",
                "Nespresso Machine",
            ]),
            images: strings(&["https://picsum.photos/800/600?random=3"]),
            base_rate: 130.0,
            total_rooms: 4,
        },
    ]
}

pub fn initial_cms() -> CmsContent {
    CmsContent {
        hero_title: "Experience Tropical Paradise at Ruka Maldives".to_string(),
        hero_subtitle: "Escape to Dhiffushi Island, where luxury meets local charm.".to_string(),
        hero_image: "https://picsum.photos/1920/1080?random=10".to_string(),
        about_text: "Ruka Maldives is a boutique guest house dedicated to providing an authentic \
                     Maldivian experience. Located on the beautiful island of Dhiffushi, we offer \
                     modern comforts, warm hospitality, and unforgettable ocean adventures."
            .to_string(),
        contact_email: "hello@rukamaldives.com".to_string(),
        contact_phone: "+960 123 4567".to_string(),
        whatsapp: "+960 987 6543".to_string(),
    }
}
