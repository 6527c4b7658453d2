// Domain layer - Core panel types and rules

pub mod errors;
pub mod model;
pub mod rules;
