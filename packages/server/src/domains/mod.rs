// Business domains

pub mod conditions;
