//! 协调存储与集群状态到API结果的投影

pub mod cluster;
pub mod snapshot;
