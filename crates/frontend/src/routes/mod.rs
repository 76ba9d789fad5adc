pub mod location;
pub mod registry;
