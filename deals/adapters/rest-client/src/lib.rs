pub use client::{ClientError, DealsRestClient};

mod client;
