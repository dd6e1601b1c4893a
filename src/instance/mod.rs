//! Problem instances: the employee record, the text format, and a
//! seeded generator for synthetic instances.

mod parser;
mod types;

pub use parser::{parse_instance, read_instance, ParseError};
pub use types::{random_instance, Employee, LANGUAGE_POOL};
