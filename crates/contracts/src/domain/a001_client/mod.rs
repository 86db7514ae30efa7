pub mod aggregate;

pub use aggregate::{Client, ClientDto};
