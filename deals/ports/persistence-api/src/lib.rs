pub use repositories::*;

mod repositories;
