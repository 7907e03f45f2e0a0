//! Gallery pages

mod samples;

pub use samples::Samples;
