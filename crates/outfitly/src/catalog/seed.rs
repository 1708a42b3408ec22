use crate::domain::{Gender, OutfitDraft};

struct SeedOutfit {
    title: &'static str,
    description: &'static str,
    items: &'static [&'static str],
    gender: Gender,
    min_temp: i32,
    max_temp: i32,
    rain_compatible: bool,
    wind_compatible: bool,
}

const BUILTIN: [SeedOutfit; 14] = [
    // Below freezing.
    SeedOutfit {
        title: "Winter Warrior",
        description: "Stay warm in freezing temperatures",
        items: &[
            "Thick Down Coat",
            "Wool Sweater",
            "Thermal Underwear",
            "Winter Boots",
            "Beanie",
            "Gloves",
            "Scarf",
        ],
        gender: Gender::Male,
        min_temp: -30,
        max_temp: 0,
        rain_compatible: true,
        wind_compatible: true,
    },
    SeedOutfit {
        title: "Snow Queen",
        description: "Elegant winter protection",
        items: &[
            "Long Puffer Coat",
            "Cashmere Sweater",
            "Fleece Leggings",
            "Fur Boots",
            "Wool Hat",
            "Leather Gloves",
        ],
        gender: Gender::Female,
        min_temp: -30,
        max_temp: 0,
        rain_compatible: true,
        wind_compatible: true,
    },
    // Cold.
    SeedOutfit {
        title: "Urban Explorer",
        description: "Perfect for chilly days",
        items: &["Wool Coat", "Hoodie", "Jeans", "Leather Boots", "Beanie"],
        gender: Gender::Male,
        min_temp: 0,
        max_temp: 10,
        rain_compatible: false,
        wind_compatible: true,
    },
    SeedOutfit {
        title: "Cozy Chic",
        description: "Stylish and warm",
        items: &[
            "Trench Coat",
            "Turtleneck Sweater",
            "Slim Jeans",
            "Ankle Boots",
            "Scarf",
        ],
        gender: Gender::Female,
        min_temp: 0,
        max_temp: 10,
        rain_compatible: false,
        wind_compatible: true,
    },
    SeedOutfit {
        title: "Rainy Day Ready",
        description: "Waterproof essentials",
        items: &["Waterproof Jacket", "Sweater", "Dark Jeans", "Rain Boots"],
        gender: Gender::Unisex,
        min_temp: 0,
        max_temp: 10,
        rain_compatible: true,
        wind_compatible: true,
    },
    // Cool.
    SeedOutfit {
        title: "Casual Cool",
        description: "Light layering for mild weather",
        items: &["Denim Jacket", "T-Shirt", "Chinos", "Sneakers"],
        gender: Gender::Male,
        min_temp: 10,
        max_temp: 18,
        rain_compatible: false,
        wind_compatible: false,
    },
    SeedOutfit {
        title: "Spring Vibes",
        description: "Fresh and trendy",
        items: &["Light Cardigan", "Blouse", "High-Waist Jeans", "Loafers"],
        gender: Gender::Female,
        min_temp: 10,
        max_temp: 18,
        rain_compatible: false,
        wind_compatible: false,
    },
    SeedOutfit {
        title: "Windbreaker Set",
        description: "Protection from cool winds",
        items: &[
            "Windbreaker Jacket",
            "Long Sleeve Tee",
            "Joggers",
            "Running Shoes",
        ],
        gender: Gender::Unisex,
        min_temp: 10,
        max_temp: 18,
        rain_compatible: true,
        wind_compatible: true,
    },
    // Warm.
    SeedOutfit {
        title: "Street Style",
        description: "Comfortable and stylish",
        items: &["Graphic Tee", "Slim Fit Jeans", "White Sneakers", "Cap"],
        gender: Gender::Male,
        min_temp: 18,
        max_temp: 25,
        rain_compatible: false,
        wind_compatible: false,
    },
    SeedOutfit {
        title: "Effortless Elegance",
        description: "Light and breezy",
        items: &["Flowy Dress", "Sandals", "Crossbody Bag", "Sunglasses"],
        gender: Gender::Female,
        min_temp: 18,
        max_temp: 25,
        rain_compatible: false,
        wind_compatible: false,
    },
    SeedOutfit {
        title: "Polo Classic",
        description: "Smart casual comfort",
        items: &["Polo Shirt", "Khaki Shorts", "Boat Shoes"],
        gender: Gender::Male,
        min_temp: 18,
        max_temp: 25,
        rain_compatible: false,
        wind_compatible: false,
    },
    // Hot.
    SeedOutfit {
        title: "Beach Ready",
        description: "Stay cool in the heat",
        items: &["Linen Shirt", "Swim Shorts", "Flip Flops", "Sunglasses"],
        gender: Gender::Male,
        min_temp: 25,
        max_temp: 50,
        rain_compatible: false,
        wind_compatible: false,
    },
    SeedOutfit {
        title: "Summer Breeze",
        description: "Light and airy",
        items: &["Crop Top", "Flowy Skirt", "Sandals", "Sun Hat"],
        gender: Gender::Female,
        min_temp: 25,
        max_temp: 50,
        rain_compatible: false,
        wind_compatible: false,
    },
    SeedOutfit {
        title: "Minimal Heat",
        description: "Maximum comfort in hot weather",
        items: &["Tank Top", "Cotton Shorts", "Slides", "Cap"],
        gender: Gender::Unisex,
        min_temp: 25,
        max_temp: 50,
        rain_compatible: false,
        wind_compatible: false,
    },
];

/// The built-in catalog used when no import is configured.
pub fn builtin_outfits() -> Vec<OutfitDraft> {
    BUILTIN
        .iter()
        .map(|seed| OutfitDraft {
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            items: seed.items.iter().map(|item| item.to_string()).collect(),
            gender: seed.gender,
            min_temp: seed.min_temp,
            max_temp: seed.max_temp,
            rain_compatible: seed.rain_compatible,
            wind_compatible: seed.wind_compatible,
        })
        .collect()
}
