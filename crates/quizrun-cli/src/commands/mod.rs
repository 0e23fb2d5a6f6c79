pub mod play;
pub mod stats;
pub mod validate;
