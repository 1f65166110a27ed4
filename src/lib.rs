pub mod config;
pub mod editor;
pub mod launch;
pub mod logging;
pub mod presenter;
