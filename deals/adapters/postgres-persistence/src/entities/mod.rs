pub mod prelude;

pub mod deal;
