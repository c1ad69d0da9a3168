//! Terminal front end: the intro splash, then the scrollable portfolio page.

pub mod app;
pub mod error;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod loading;
pub mod mvi;
pub mod page;
pub mod render;
pub mod runtime;
pub mod sections;
pub mod splash;
pub mod terminal_guard;
pub mod theme;
pub mod typewriter;

pub use runtime::{run, RunOptions};
