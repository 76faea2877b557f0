use takeoff_core::error::TakeoffError;
use takeoff_core::model::EstimateResult;

pub fn print(result: &EstimateResult) -> Result<(), TakeoffError> {
    let value = serde_json::json!({
        "rooms": result.rooms,
        "boq": result.boq,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
