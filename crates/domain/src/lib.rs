pub mod entities;
pub mod keyspace;
pub mod ports;

pub use entities::*;
pub use keyspace::*;
pub use ports::*;
pub use scheduler_core::{SchedulerError, SchedulerResult};
