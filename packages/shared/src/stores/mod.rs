pub mod errors;
pub mod file_session_store;
pub mod memory_session_store;
pub mod session_store;
