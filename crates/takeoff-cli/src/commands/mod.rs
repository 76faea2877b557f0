pub mod estimate;
pub mod extract;
pub mod rules;
