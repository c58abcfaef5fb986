pub use migrator::Migrator;

mod m20240101_000001_create_tables;
mod migrator;
