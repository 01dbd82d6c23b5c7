//! Fixed sample catalog loaded into an empty store at startup.

use catalog_core::{DomainResult, Price};

use crate::product::NewProduct;

/// `(name, description, price in cents)` for every sample product.
pub const SEED_PRODUCTS: &[(&str, &str, u32)] = &[
    ("iPhone 15 Pro", "Apple flagship smartphone with A17 Pro chip, Titanium design", 99_999),
    ("Samsung Galaxy S24 Ultra", "AI-powered Android smartphone with S Pen", 129_999),
    ("Sony WH-1000XM5", "Industry leading noise canceling headphones", 34_800),
    ("MacBook Air M3", "Supercharged by M3, incredibly thin and light", 109_900),
    ("Logitech MX Master 3S", "Performance wireless mouse, ultra-fast scrolling", 9_999),
    ("Kindle Paperwhite", "Now with a 6.8\u{201d} display and adjustable warm light", 13_999),
    ("PlayStation 5", "Experience lightning fast loading with an ultra-high speed SSD", 49_999),
    ("Xbox Series X", "The fastest, most powerful Xbox ever", 49_999),
    ("Nintendo Switch OLED", "7-inch OLED screen, wide adjustable stand", 34_999),
    ("Dell XPS 13", "Iconic design, manufactured with CNC aluminum", 119_900),
    ("iPad Air", "Serious performance in a thin and light design", 59_900),
    (
        "GoPro Hero 12",
        "Incredible image quality, even better HyperSmooth video stabilization",
        39_999,
    ),
    ("Dyson V15 Detect", "Powerful cordless vacuum with laser illumination", 74_999),
    ("Nespresso Vertuo", "Versatile coffee and espresso machine", 15_900),
    ("Instant Pot Duo", "7-in-1 electric pressure cooker, slow cooker, rice cooker", 7_999),
    ("Fitbit Charge 6", "Fitness tracker with heart rate, built-in GPS", 15_995),
    ("Apple Watch Series 9", "Smarter, brighter, and mightier", 39_900),
    ("Samsung Odyssey G9", "49-inch curved gaming monitor, 240Hz", 129_999),
    ("Keychron K2", "Wireless mechanical keyboard for Mac and Windows", 7_900),
    ("Bose SoundLink Flex", "Bluetooth speaker with waterproof design", 14_900),
    ("Google Pixel 8", "The helpful phone engineered by Google", 69_900),
    ("Amazon Echo Dot", "Smart speaker with Alexa, vibrant sound", 4_999),
    ("Ring Video Doorbell", "1080p HD video, improved motion detection", 9_999),
    ("Philips Hue Starter Kit", "White and Color Ambiance smart light bulbs", 19_999),
    ("Sonos Arc", "The premium smart soundbar for TV, movies, music", 89_900),
    ("Razer DeathAdder V3", "Ultra-lightweight ergonomic esports mouse", 6_999),
    ("SteelSeries Arctis Nova", "High fidelity gaming headset", 17_999),
    ("ASUS ROG Zephyrus", "Ultra-slim gaming laptop with GeForce RTX", 189_999),
    ("LG OLED C3 TV", "Self-lit pixels, brightness booster", 149_900),
    ("Canon EOS R6", "Full-frame mirrorless camera for photographers", 229_900),
    ("DJI Mini 4 Pro", "Mini camera drone with omnidirectional obstacle sensing", 75_900),
    ("Anker 737 Power Bank", "Ultra-powerful two-way charging", 14_999),
    ("Yeti Rambler", "Vacuum insulated stainless steel bottle", 5_000),
    ("North Face Backpack", "Classic design with modern organization", 9_900),
    ("Nike Air Zoom Pegasus", "Responsive road running shoes", 13_000),
    ("Adidas Ultraboost", "Energy-returning boost midsole", 18_000),
    ("Levi's 501 Original", "The original straight fit jeans", 7_950),
    ("Ray-Ban Aviator", "Classic style sunglasses", 16_300),
    ("Samsonite Omni", "Hardside expandable luggage", 14_999),
    ("Herman Miller Aeron", "The standard for office seating", 165_000),
    ("IKEA Markus", "Comfortable office chair with mesh back", 22_900),
    ("NutriBullet Pro", "High-speed blender/mixer system", 8_999),
    ("KitchenAid Mixer", "Iconic stand mixer for baking", 37_999),
    ("De'Longhi ECP3420", "Bar pump espresso and cappuccino machine", 13_995),
    ("Hydro Flask", "Wide mouth bottle with flex sip lid", 3_295),
    ("JBL Flip 6", "Bold sound for every adventure", 12_995),
    ("Garmin Forerunner", "GPS running watch with training features", 29_999),
    ("Seagate Portable HDD", "External hard drive for backup", 6_999),
    ("SanDisk Extreme SSD", "Portable NVMe SSD, robust and fast", 12_999),
    ("Raspberry Pi 5", "The everything computer, optimized", 8_000),
];

/// The sample catalog as validated product attributes, in seed order.
pub fn seed_products() -> DomainResult<Vec<NewProduct>> {
    SEED_PRODUCTS
        .iter()
        .map(|(name, description, cents)| NewProduct::new(*name, *description, Price::from(*cents)))
        .collect()
}
