pub mod back;
pub mod backup;
pub mod board;
pub mod config;
pub mod db;
pub mod export;
pub mod extend;
pub mod import;
pub mod init;
pub mod log;
pub mod out;
pub mod personnel;
pub mod stats;
