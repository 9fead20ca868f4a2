//! CLI commands for mazegraph

pub mod dispatch;
pub mod helpers;
pub mod info;
pub mod run;
pub mod weight;
