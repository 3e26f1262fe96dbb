pub mod config;
pub mod pipeline;
pub mod report;
pub mod tasks;

pub use config::*;
pub use pipeline::*;
pub use report::*;
pub use tasks::*;
