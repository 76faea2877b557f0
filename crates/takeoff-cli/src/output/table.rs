use takeoff_core::model::{EstimateResult, RoomArea};

pub fn format_rooms(rooms: &[RoomArea]) -> String {
    if rooms.is_empty() {
        return "No rooms found.\n".to_string();
    }

    let width = rooms
        .iter()
        .map(|r| r.room.len())
        .max()
        .unwrap_or(4)
        .max("Room".len());

    let mut out = String::new();
    out.push_str(&format!("{:<width$}  Area (m²)\n", "Room"));
    for room in rooms {
        out.push_str(&format!("{:<width$}  {}\n", room.room, room.area_m2));
    }
    out.push_str(&format!("\n{} room(s)\n", rooms.len()));
    out
}

pub fn print(result: &EstimateResult) {
    print!("{}", format_rooms(&result.rooms));

    if result.boq.is_empty() {
        println!("\nNo BOQ line items.");
        return;
    }

    let width = result
        .boq
        .iter()
        .map(|i| i.item.len())
        .max()
        .unwrap_or(4)
        .max("Item".len());

    println!();
    println!("{:<width$}  {:<4}  Quantity", "Item", "UoM");
    for item in &result.boq {
        println!(
            "{:<width$}  {:<4}  {:.2}",
            item.item,
            item.uom.to_string(),
            item.qty
        );
    }
    println!("\n{} line item(s)", result.boq.len());
}
