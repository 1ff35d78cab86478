pub mod analyze;
pub mod clear;
pub mod history;
pub mod init;
pub mod practice;
pub mod questions;
pub mod show;
pub mod validate;
