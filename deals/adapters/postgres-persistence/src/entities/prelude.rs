pub use super::deal::Entity as Deal;
