pub mod clock;
pub mod events;
pub mod stores;
pub mod transports;
