// Crate root library declaration and module exports.
pub mod config;
pub mod filter;
pub mod gui;
pub mod model;
pub mod paths;
pub mod roster;
pub mod watcher;
