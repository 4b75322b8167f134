pub mod assoc;
pub mod error;
pub mod loader;
pub mod mapper;
pub mod mapping;
pub mod matching;
pub mod schema;
pub mod status;
pub mod types;
pub mod weights;
