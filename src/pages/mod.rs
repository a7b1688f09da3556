//! Page components for the Driftwood reader.

mod home;

pub use home::Home;
