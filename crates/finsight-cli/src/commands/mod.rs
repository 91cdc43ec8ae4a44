pub mod analysis;
pub mod sample;
