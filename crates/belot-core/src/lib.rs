#![deny(warnings)]
pub mod combo;
pub mod game;
pub mod model;
pub mod report;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "belot"
    }

    pub const fn codename() -> &'static str {
        "Score Reader"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
