//! Conversion pipeline
//!
//! Runs one profile through every stage, strictly in sequence:
//! 1. Render and parse the profile page
//! 2. Extract the headline and each section in declaration order
//! 3. Resolve redirect-wrapped external links
//! 4. Render the markdown document

mod coordinator;

pub use coordinator::Coordinator;
