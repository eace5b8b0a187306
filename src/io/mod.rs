pub mod file;
pub mod mapper;
pub mod tree;

pub use file::{write, DataWriter};
pub use mapper::{map_question, map_section, map_user};
pub use tree::{Map, Value};
