use crate::model::BoqItem;

/// Render the BOQ table as UTF-8 CSV with columns `item,uom,qty`.
///
/// Quantities are rounded to 2 decimals here and nowhere earlier. Empty
/// input yields the header row alone.
pub fn render_boq(items: &[BoqItem]) -> Vec<u8> {
    let mut out = String::from("item,uom,qty\n");
    for item in items {
        out.push_str(&field(&item.item));
        out.push(',');
        out.push_str(&item.uom.to_string());
        out.push(',');
        out.push_str(&format!("{:.2}", item.qty));
        out.push('\n');
    }
    out.into_bytes()
}

/// Quote a field only when it needs quoting.
fn field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Uom;

    fn item(label: &str, uom: Uom, qty: f64) -> BoqItem {
        BoqItem {
            item: label.to_string(),
            uom,
            qty,
        }
    }

    /// Minimal CSV row reader for round-trip checks; handles the quoting
    /// `field()` can produce.
    fn parse_rows(csv: &str) -> Vec<Vec<String>> {
        csv.lines()
            .skip(1)
            .map(|line| {
                let mut fields = Vec::new();
                let mut rest = line;
                while !rest.is_empty() {
                    if let Some(stripped) = rest.strip_prefix('"') {
                        let end = stripped.find('"').unwrap();
                        fields.push(stripped[..end].replace("\"\"", "\""));
                        rest = stripped[end + 1..].trim_start_matches(',');
                    } else {
                        match rest.find(',') {
                            Some(pos) => {
                                fields.push(rest[..pos].to_string());
                                rest = &rest[pos + 1..];
                            }
                            None => {
                                fields.push(rest.to_string());
                                rest = "";
                            }
                        }
                    }
                }
                fields
            })
            .collect()
    }

    #[test]
    fn test_empty_input_is_header_only() {
        let csv = String::from_utf8(render_boq(&[])).unwrap();
        assert_eq!(csv, "item,uom,qty\n");
    }

    #[test]
    fn test_quantities_rounded_to_two_decimals() {
        let csv = String::from_utf8(render_boq(&[item(
            "Floor tiles - Kitchen",
            Uom::SquareMeters,
            10.0 * 1.03,
        )]))
        .unwrap();
        assert_eq!(csv, "item,uom,qty\nFloor tiles - Kitchen,m²,10.30\n");
    }

    #[test]
    fn test_round_trip_preserves_tuples_and_order() {
        let items = vec![
            item("Floor tiles - Kitchen", Uom::SquareMeters, 10.3),
            item("Wall tiles - Kitchen", Uom::SquareMeters, 19.125455288698358),
            item("Skirting - Kitchen", Uom::Meters, 10.119288512538815),
        ];
        let csv = String::from_utf8(render_boq(&items)).unwrap();
        let rows = parse_rows(&csv);
        assert_eq!(rows.len(), items.len());
        for (row, it) in rows.iter().zip(&items) {
            assert_eq!(row[0], it.item);
            assert_eq!(row[1], it.uom.to_string());
            assert_eq!(row[2], format!("{:.2}", it.qty));
        }
    }

    #[test]
    fn test_field_with_comma_is_quoted() {
        let csv = String::from_utf8(render_boq(&[item(
            "Paint - Hall, upper",
            Uom::SquareMeters,
            1.0,
        )]))
        .unwrap();
        assert!(csv.contains("\"Paint - Hall, upper\""));
        let rows = parse_rows(&csv);
        assert_eq!(rows[0][0], "Paint - Hall, upper");
    }
}
