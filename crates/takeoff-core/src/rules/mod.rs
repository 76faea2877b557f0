use crate::model::{BoqItem, RoomArea, Uom};
use serde::{Deserialize, Serialize};

/// Wall height assumed for paint areas unless overridden.
pub const DEFAULT_WALL_HEIGHT_M: f64 = 3.0;

/// Wall tiles run to this height regardless of the room's wall height.
const WALL_TILE_HEIGHT_M: f64 = 2.4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateOptions {
    pub wall_height_m: f64,
}

impl Default for EstimateOptions {
    fn default() -> Self {
        EstimateOptions {
            wall_height_m: DEFAULT_WALL_HEIGHT_M,
        }
    }
}

/// Decides whether a rule applies to a room label.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Label contains any of these substrings (case-insensitive).
    AnyKeyword(&'static [&'static str]),
    /// Every room.
    Always,
}

/// One entry of the quantity rule table.
pub struct QuantityRule {
    pub label: &'static str,
    pub uom: Uom,
    /// Human-readable formula, shown by the CLI `rules` command.
    pub formula: &'static str,
    pub trigger: Trigger,
    /// Rules sharing a group are mutually exclusive per room; the first
    /// match in table order wins.
    group: Option<&'static str>,
    quantity: fn(area: f64, perimeter: f64, options: &EstimateOptions) -> f64,
}

impl QuantityRule {
    /// Description of the rooms this rule applies to.
    pub fn applies_to(&self) -> String {
        match self.trigger {
            Trigger::Always => "every room".to_string(),
            Trigger::AnyKeyword(keywords) => format!("rooms containing {}", keywords.join("/")),
        }
    }
}

const WET_AREA_KEYWORDS: &[&str] = &["kitchen", "toilet", "bath", "wc", "laundry"];
const CIRCULATION_KEYWORDS: &[&str] = &["corridor", "hall", "lobby"];

fn wet_floor_qty(area: f64, _perimeter: f64, _options: &EstimateOptions) -> f64 {
    area * 1.03
}

fn circulation_floor_qty(area: f64, _perimeter: f64, _options: &EstimateOptions) -> f64 {
    area * 1.02
}

fn wall_tile_qty(_area: f64, perimeter: f64, _options: &EstimateOptions) -> f64 {
    (perimeter * 0.6) * WALL_TILE_HEIGHT_M * 1.05
}

fn paint_qty(_area: f64, perimeter: f64, options: &EstimateOptions) -> f64 {
    (perimeter * options.wall_height_m) * 0.9
}

fn skirting_qty(_area: f64, perimeter: f64, _options: &EstimateOptions) -> f64 {
    perimeter * 0.8
}

/// The quantity table, evaluated per room in this order.
const RULES: &[QuantityRule] = &[
    QuantityRule {
        label: "Floor tiles",
        uom: Uom::SquareMeters,
        formula: "area x 1.03 (3% waste)",
        trigger: Trigger::AnyKeyword(WET_AREA_KEYWORDS),
        group: Some("floor"),
        quantity: wet_floor_qty,
    },
    QuantityRule {
        label: "Floor tiles",
        uom: Uom::SquareMeters,
        formula: "area x 1.02 (2% waste)",
        trigger: Trigger::AnyKeyword(CIRCULATION_KEYWORDS),
        group: Some("floor"),
        quantity: circulation_floor_qty,
    },
    QuantityRule {
        label: "Wall tiles",
        uom: Uom::SquareMeters,
        formula: "(P x 0.6) x 2.4 x 1.05 (60% of perimeter tiled to 2.4 m, 5% waste)",
        trigger: Trigger::AnyKeyword(WET_AREA_KEYWORDS),
        group: None,
        quantity: wall_tile_qty,
    },
    QuantityRule {
        label: "Paint",
        uom: Uom::SquareMeters,
        formula: "(P x wall height) x 0.9 (10% deduction for openings)",
        trigger: Trigger::Always,
        group: None,
        quantity: paint_qty,
    },
    QuantityRule {
        label: "Skirting",
        uom: Uom::Meters,
        formula: "P x 0.8 (skirting along 80% of perimeter)",
        trigger: Trigger::Always,
        group: None,
        quantity: skirting_qty,
    },
];

/// The rule table, for inspection (CLI `rules` command).
pub fn rules() -> &'static [QuantityRule] {
    RULES
}

/// Derive BOQ line items from aggregated room areas.
///
/// The perimeter is a square-footprint approximation, P = 4 * sqrt(area),
/// not a measured perimeter. Quantities stay unrounded here; rounding to
/// 2 decimals belongs to the document builders.
pub fn estimate(rooms: &[RoomArea], options: &EstimateOptions) -> Vec<BoqItem> {
    let mut items = Vec::new();

    for room in rooms {
        let perimeter = 4.0 * room.area_m2.sqrt();
        let label_lower = room.room.to_lowercase();
        let mut matched_groups: Vec<&str> = Vec::new();

        for rule in RULES {
            let applies = match rule.trigger {
                Trigger::Always => true,
                Trigger::AnyKeyword(keywords) => {
                    keywords.iter().any(|k| label_lower.contains(k))
                }
            };
            if !applies {
                continue;
            }

            if let Some(group) = rule.group {
                if matched_groups.contains(&group) {
                    continue;
                }
                matched_groups.push(group);
            }

            items.push(BoqItem {
                item: format!("{} - {}", rule.label, room.room),
                uom: rule.uom,
                qty: (rule.quantity)(room.area_m2, perimeter, options),
            });
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(label: &str, area: f64) -> RoomArea {
        RoomArea {
            room: label.to_string(),
            area_m2: area,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_kitchen_yields_four_items() {
        let items = estimate(&[room("Kitchen", 10.0)], &EstimateOptions::default());
        assert_eq!(items.len(), 4);

        let p = 4.0 * 10.0_f64.sqrt();

        assert_eq!(items[0].item, "Floor tiles - Kitchen");
        assert_eq!(items[0].uom, Uom::SquareMeters);
        assert!(close(items[0].qty, 10.0 * 1.03));

        assert_eq!(items[1].item, "Wall tiles - Kitchen");
        assert!(close(items[1].qty, (p * 0.6) * 2.4 * 1.05));

        assert_eq!(items[2].item, "Paint - Kitchen");
        assert!(close(items[2].qty, (p * 3.0) * 0.9));

        assert_eq!(items[3].item, "Skirting - Kitchen");
        assert_eq!(items[3].uom, Uom::Meters);
        assert!(close(items[3].qty, p * 0.8));
    }

    #[test]
    fn test_bedroom_gets_paint_and_skirting_only() {
        let items = estimate(&[room("Bed", 16.0)], &EstimateOptions::default());
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item, "Paint - Bed");
        // area 16 -> P = 16
        assert!(close(items[0].qty, 16.0 * 3.0 * 0.9));
        assert_eq!(items[1].item, "Skirting - Bed");
        assert!(close(items[1].qty, 16.0 * 0.8));
    }

    #[test]
    fn test_corridor_gets_circulation_floor_rate() {
        let items = estimate(&[room("Corridor", 6.0)], &EstimateOptions::default());
        let floor = items.iter().find(|i| i.item.starts_with("Floor")).unwrap();
        assert!(close(floor.qty, 6.0 * 1.02));
        // No wall tiles for a corridor.
        assert!(!items.iter().any(|i| i.item.starts_with("Wall")));
    }

    #[test]
    fn test_floor_rules_mutually_exclusive_wet_wins() {
        // A label matching both groups takes the wet-area rate only.
        let items = estimate(&[room("Kitchen hall", 8.0)], &EstimateOptions::default());
        let floors: Vec<_> = items.iter().filter(|i| i.item.starts_with("Floor")).collect();
        assert_eq!(floors.len(), 1);
        assert!(close(floors[0].qty, 8.0 * 1.03));
    }

    #[test]
    fn test_unknown_room_gets_paint_and_skirting() {
        let items = estimate(&[room("Unknown", 9.0)], &EstimateOptions::default());
        assert_eq!(items.len(), 2);
        assert!(items[0].item.contains("Unknown"));
    }

    #[test]
    fn test_wall_height_option_scales_paint() {
        let opts = EstimateOptions { wall_height_m: 2.7 };
        let items = estimate(&[room("Bed", 16.0)], &opts);
        assert!(close(items[0].qty, 16.0 * 2.7 * 0.9));
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(estimate(&[], &EstimateOptions::default()).is_empty());
    }

    #[test]
    fn test_rule_table_shape() {
        let table = rules();
        assert_eq!(table.len(), 5);
        assert!(table.iter().filter(|r| r.label == "Floor tiles").count() == 2);
        assert_eq!(table.last().unwrap().uom, Uom::Meters);
    }
}
