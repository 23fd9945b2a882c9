pub mod auth_transport;
pub mod errors;
