use takeoff_core::error::TakeoffError;
use takeoff_core::rules;

pub fn list() -> Result<(), TakeoffError> {
    println!("Quantity rules, evaluated per room in this order:\n");
    for rule in rules::rules() {
        println!("  {:<12} [{}]  applies to {}", rule.label, rule.uom, rule.applies_to());
        println!("               {}", rule.formula);
        println!();
    }
    println!("The two floor-tile rules are mutually exclusive per room; the first match wins.");
    Ok(())
}

pub fn explain() -> Result<(), TakeoffError> {
    println!("How quantities are estimated\n");
    println!(
        "Each extracted room contributes line items based on keyword matches\n\
         against its label. The perimeter P is approximated from the floor\n\
         area as P = 4 * sqrt(area), i.e. the room is treated as square;\n\
         this is a deliberate simplification, not a measured perimeter.\n"
    );
    println!(
        "Wet areas (kitchen, toilet, bath, wc, laundry) get floor tiles with\n\
         a 3% waste allowance and wall tiles over 60% of the perimeter up to\n\
         2.4 m height with 5% waste. Circulation areas (corridor, hall,\n\
         lobby) get floor tiles with 2% waste instead. Every room, including\n\
         ones labelled Unknown, gets paint over its wall area minus a 10%\n\
         deduction for openings, and skirting along 80% of the perimeter.\n"
    );
    println!(
        "The wall height used by the paint rule defaults to {} m and can be\n\
         overridden with --wall-height.",
        rules::DEFAULT_WALL_HEIGHT_M
    );
    Ok(())
}
