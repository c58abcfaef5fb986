pub use api::Deals;

mod api;
mod services;
