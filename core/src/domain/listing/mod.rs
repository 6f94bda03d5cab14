pub mod entities;
pub mod ports;
pub mod services;

pub use entities::{ListResult, PaginationInfo};
pub use ports::ListStore;
pub use services::run_list;
