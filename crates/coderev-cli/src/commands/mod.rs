pub mod config_path;
pub mod review;
pub mod serve;
