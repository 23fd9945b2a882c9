pub mod models;
pub mod services;
pub mod stores;
pub mod transports;
