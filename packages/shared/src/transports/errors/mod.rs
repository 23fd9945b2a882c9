pub mod auth_transport_errors;
