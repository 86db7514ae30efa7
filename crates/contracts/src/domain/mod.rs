pub mod common;

pub mod a001_client;
pub mod a002_tariff;
pub mod a003_order;
