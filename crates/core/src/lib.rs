#![deny(clippy::all)]

pub mod artifact;
pub mod config;
pub mod deck;
pub mod frontmatter;
pub mod ids;
pub mod meta;
pub mod save;
pub mod scaffold;
pub mod sources;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
