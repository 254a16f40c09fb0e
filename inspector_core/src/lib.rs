// Lets `#[derive(Reflect)]` resolve `::inspector_core` paths inside this crate.
extern crate self as inspector_core;

pub mod commands;
pub mod components;
pub mod inspector;
pub mod logging;
pub mod reflect;
pub mod storage;
pub mod ui;

pub use reflect_derive::Reflect;

#[doc(hidden)]
pub use inventory;
#[doc(hidden)]
pub use strum;
