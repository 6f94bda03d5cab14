pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{NormalizedQuery, QueryDirective};
pub use services::{build_directive, normalize};
pub use value_objects::ListQueryInput;
