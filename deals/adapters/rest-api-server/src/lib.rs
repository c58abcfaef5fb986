pub use server::{router, run, serve};

mod errors;
mod server;
