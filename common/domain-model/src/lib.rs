pub use deal::{CreateDeal, Deal};
pub use validation::{Field, Violation};

pub mod mapping;
pub mod timestamp;

mod deal;
mod validation;
