pub mod deal;
pub mod import;
