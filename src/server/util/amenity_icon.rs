/// Icon used for amenities missing from the lookup table.
pub const DEFAULT_ICON: &str = "Sparkles";

const ICONS: &[(&str, &str)] = &[
    ("WiFi", "Wifi"),
    ("High-Speed Internet", "Globe"),
    ("Smart TV", "Tv"),
    ("Cable TV", "Tv2"),
    ("Phone", "Phone"),
    ("Air Conditioning", "AirVent"),
    ("Heating", "Flame"),
    ("Ceiling Fan", "Fan"),
    ("Kitchen", "ChefHat"),
    ("Kitchenette", "CookingPot"),
    ("Microwave", "Microwave"),
    ("Refrigerator", "Refrigerator"),
    ("Coffee Maker", "Coffee"),
    ("Kettle", "Coffee"),
    ("Private Bathroom", "Bath"),
    ("Hot Water", "Droplets"),
    ("Shower", "ShowerHead"),
    ("Bathtub", "Bath"),
    ("Hair Dryer", "Wind"),
    ("King Bed", "Bed"),
    ("Queen Bed", "Bed"),
    ("Twin Beds", "BedDouble"),
    ("Sofa Bed", "Sofa"),
    ("Balcony", "Home"),
    ("Garden View", "Trees"),
    ("Ocean View", "Waves"),
    ("Mountain View", "Mountain"),
    ("City View", "Building2"),
    ("Safe/Lockbox", "Lock"),
    ("Smoke Detector", "AlertTriangle"),
    ("First Aid Kit", "Plus"),
    ("Free Parking", "Car"),
    ("EV Charging", "Zap"),
    ("Airport Shuttle", "Bus"),
    ("Pet-Friendly", "Dog"),
    ("Washer", "WashingMachine"),
    ("Laundry Service", "Shirt"),
    ("Pool", "Waves"),
    ("Hot Tub/Jacuzzi", "Waves"),
    ("Sauna", "Flame"),
    ("Gym/Fitness Center", "Dumbbell"),
    ("Spa", "Sparkles"),
    ("Dedicated Workspace", "Briefcase"),
    ("Wheelchair Accessible", "Accessibility"),
    ("Elevator", "MoveVertical"),
    ("Breakfast Included", "Croissant"),
    ("Room Service", "ConciergeBell"),
    ("Mini Bar", "Wine"),
];

/// Looks up the display icon for an amenity name, ignoring case and surrounding whitespace.
pub fn icon_for(name: &str) -> &'static str {
    let name = name.trim();
    ICONS
        .iter()
        .find(|(amenity, _)| amenity.eq_ignore_ascii_case(name))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}
