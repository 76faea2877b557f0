/// Fixed room vocabulary searched in the line neighborhood around an area
/// match. Short forms on purpose: "bed" also hits "Bedroom", "bath" hits
/// "Bathroom". The matched keyword itself becomes the room label.
pub const ROOM_KEYWORDS: &[&str] = &[
    "bed", "living", "hall", "kitchen", "pantry", "toilet", "bath", "wc", "corridor", "balcony",
    "store", "maid", "dining", "guest", "office", "majlis", "lobby", "study", "laundry",
];

/// Find the room keyword occurring first in `context`, case-insensitive.
///
/// "First" is by match position; vocabulary order breaks ties.
pub fn find_room(context: &str) -> Option<&'static str> {
    let lower = context.to_lowercase();
    ROOM_KEYWORDS
        .iter()
        .filter_map(|k| lower.find(k).map(|pos| (pos, *k)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, k)| k)
}

/// Render a vocabulary keyword in title case ("bed" -> "Bed").
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
