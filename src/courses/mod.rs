// Course catalog — stream/interest lookup over a list of courses and
// the colleges that offer them.

pub mod catalog;
pub mod interests;

pub use catalog::{Course, CourseCatalog};
pub use interests::{interests_for, keywords_for, normalize_stream, ALL_COURSES};
