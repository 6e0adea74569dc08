pub extern crate celride_core as core;

pub use app_builder_scene_ext::AppBuilderSceneExt;
pub use celride_core::{App, AppBuilder, Frame};

mod app_builder_scene_ext;
pub mod commands;
#[cfg(test)]
mod test_utils;
