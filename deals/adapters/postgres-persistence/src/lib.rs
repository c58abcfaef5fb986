pub use initiator::init_db;
pub use repositories::DealPostgresRepository;

pub mod entities;
pub mod migrations;

mod initiator;
mod repositories;
