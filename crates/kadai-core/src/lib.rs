pub mod course;
pub mod judgment;
pub mod normalize;

pub use course::{Course, CourseError, roster_from_value};
pub use judgment::{ConfidenceBand, Judgment};
pub use normalize::{compact, normalize};
