pub mod ai;
pub mod hint;
