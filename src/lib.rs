pub mod config;
pub mod descriptor;
pub mod discover;
pub mod run;
pub mod version;
