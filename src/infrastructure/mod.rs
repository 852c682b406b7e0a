pub mod config;
pub mod network;
pub mod secrets;
pub mod storage;
