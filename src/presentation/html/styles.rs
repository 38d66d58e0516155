// src/presentation/html/styles.rs
//! Tailwind class lookups for badges and accents.

/// Category strip palette, picked by position.
pub const CATEGORY_PALETTE: [&str; 6] = [
    "bg-blue-100 text-blue-700 hover:bg-blue-200",
    "bg-green-100 text-green-700 hover:bg-green-200",
    "bg-purple-100 text-purple-700 hover:bg-purple-200",
    "bg-orange-100 text-orange-700 hover:bg-orange-200",
    "bg-pink-100 text-pink-700 hover:bg-pink-200",
    "bg-indigo-100 text-indigo-700 hover:bg-indigo-200",
];

pub const DEFAULT_CATEGORY_BADGE: &str = "bg-gray-100 text-gray-800";

const CATEGORY_BADGES: &[(&str, &str)] = &[
    ("Compliance", "bg-blue-100 text-blue-800"),
    ("Privacy", "bg-green-100 text-green-800"),
    ("Security", "bg-red-100 text-red-800"),
    ("AI & Automation", "bg-purple-100 text-purple-800"),
    ("Best Practices", "bg-yellow-100 text-yellow-800"),
    ("Industry News", "bg-indigo-100 text-indigo-800"),
];

pub const FEATURED_PRIMARY_ACCENT: &str = "from-blue-600 to-indigo-700";
pub const FEATURED_SECONDARY_ACCENT: &str = "from-emerald-500 to-teal-600";

pub fn palette_class(index: usize) -> &'static str {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}

/// Badge style for a category name; exact match, unknown names get the default.
pub fn category_badge_class(category: &str) -> &'static str {
    CATEGORY_BADGES
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(DEFAULT_CATEGORY_BADGE, |(_, class)| class)
}

pub fn featured_accent_class(index: usize) -> &'static str {
    if index == 0 {
        FEATURED_PRIMARY_ACCENT
    } else {
        FEATURED_SECONDARY_ACCENT
    }
}
