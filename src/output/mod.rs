//! Output: the log stream sink and operator-facing text (configuration
//! dump, run summary)

pub mod sink;
pub mod text;
