//! Embedded word lists
//!
//! Small built-in lists compiled into the binary so the game stays playable
//! when no word list files are available.

/// Five-letter fallback words
pub const FIVE: &[&str] = &[
    "apple", "brave", "crane", "slate", "flame", "grape", "house", "light", "mouse", "night",
    "ocean", "piano", "queen", "river", "stone", "table", "unity", "voice", "water", "youth",
    "zebra", "angel", "beach", "chair", "dance", "eagle", "field", "glass", "heart", "index",
    "jelly", "knife", "lemon", "magic", "noble", "orbit", "peace", "quiet", "robot", "sugar",
];

/// Six-letter fallback words
pub const SIX: &[&str] = &[
    "buffer", "anchor", "basket", "candle", "dragon", "empire", "falcon", "garden", "hammer",
    "island", "jungle", "kettle", "ladder", "market", "needle", "orange", "pencil", "rabbit",
    "silver", "tunnel", "violet", "window", "yellow", "zipper", "bridge", "castle", "dinner",
    "engine", "forest", "guitar", "harbor", "insect", "jacket", "kitten", "lizard", "mirror",
    "number", "planet", "rocket", "summer",
];

/// Seven-letter fallback words
pub const SEVEN: &[&str] = &[
    "ancient", "balance", "cabinet", "diamond", "eastern", "fashion", "general", "harmony",
    "imagine", "journey", "kitchen", "library", "machine", "natural", "october", "package",
    "quality", "rainbow", "science", "teacher", "uniform", "village", "weather", "address",
    "blanket", "captain", "dolphin", "example", "freedom", "gallery", "history", "illness",
    "justice", "kingdom", "lantern", "monster", "nothing", "orchard", "pattern", "thunder",
];

/// Built-in list for `length`, if there is one
#[must_use]
pub const fn fallback(length: usize) -> Option<&'static [&'static str]> {
    match length {
        5 => Some(FIVE),
        6 => Some(SIX),
        7 => Some(SEVEN),
        _ => None,
    }
}
