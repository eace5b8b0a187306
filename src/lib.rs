//! Writes users and interview questions to JSON files.
//!
//! Entities are mapped to an ordered [`Value`] tree by [`io::mapper`] and
//! written by [`DataWriter`] to the paths in a [`StoreConfig`]. There is no
//! read path back into entities.

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod sample;

pub use config::StoreConfig;
pub use error::{ConfigError, WriteError};
pub use io::{map_question, map_user, DataWriter, Value};
pub use model::{InterviewQuestion, Profile, Section, User};
