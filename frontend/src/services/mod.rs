pub mod bootstrap;
pub mod logging;
pub mod storage;
pub mod video;
