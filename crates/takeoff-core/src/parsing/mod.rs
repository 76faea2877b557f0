pub mod keywords;

use crate::model::RoomArea;
use keywords::{find_room, title_case};
use regex::Regex;
use std::sync::LazyLock;

/// Area measurement: a decimal number followed by an area-unit token.
///
/// Accepted unit spellings: m2, m², sqm, sq.m, sq m, square meter(s).
/// Dimension-style lines ("3.20 x 4.00 m") carry no unit token and do
/// not match.
static AREA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:m²|m2|sq\.?\s*m|square\s+meters?)").unwrap()
});

/// Split raw OCR text into trimmed, non-empty lines.
///
/// Blank lines are dropped before indexing, so they never take part in
/// the neighbor search below.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scan normalized lines for (room, area) pairs and aggregate them.
///
/// For each line matching the area pattern, the room keyword is searched
/// in a neighborhood of the previous, current and next line. Lines whose
/// captured number does not parse to a positive finite value are skipped
/// without aborting the pass. Duplicate labels are summed; output order
/// is first-seen, deterministic for identical input.
pub fn extract_rooms(lines: &[String]) -> Vec<RoomArea> {
    let mut rooms: Vec<RoomArea> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(caps) = AREA_RE.captures(line) else {
            continue;
        };

        let Ok(area) = caps[1].parse::<f64>() else {
            continue;
        };
        if !area.is_finite() || area <= 0.0 {
            continue;
        }

        // Neighborhood: previous + current + next line, space-joined.
        let mut context = String::new();
        if i > 0 {
            context.push_str(&lines[i - 1]);
            context.push(' ');
        }
        context.push_str(line);
        if let Some(next) = lines.get(i + 1) {
            context.push(' ');
            context.push_str(next);
        }

        let room = match find_room(&context) {
            Some(keyword) => title_case(keyword),
            None => "Unknown".to_string(),
        };

        match rooms.iter_mut().find(|r| r.room == room) {
            Some(existing) => existing.area_m2 += area,
            None => rooms.push(RoomArea { room, area_m2: area }),
        }
    }

    rooms
}
