pub use repositories::InMemoryDealRepository;

mod repositories;
