pub use deal::DealPostgresRepository;

mod deal;
