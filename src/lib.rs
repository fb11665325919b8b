#[macro_use]
extern crate tracing;

pub mod carousel;
pub mod config;
pub mod element;
pub mod input;
pub mod utils;

pub use carousel::{init, DragScroll};
pub use config::Config;
pub use element::{Element, Elements, Slide, Transform};
