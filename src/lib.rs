pub mod cli;
pub mod config;
pub mod models;
pub mod storage;
pub mod store;
pub mod utils;

pub use config::Config;
pub use models::{Filter, Task};
pub use storage::Storage;
pub use store::TaskStore;
