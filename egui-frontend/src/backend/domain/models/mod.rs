pub mod profile;
pub mod slot;
