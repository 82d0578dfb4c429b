pub mod donation;
pub mod response;
pub mod session;
pub mod stats;
