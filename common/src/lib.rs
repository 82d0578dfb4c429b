//! Wire models shared between the browser controller and the Save N Serve API.

pub mod model;
pub mod requests;
