//! Screen renderers

pub mod sign_in_up;
pub mod success;
