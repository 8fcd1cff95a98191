//! Platform-free behavior logic for the site's page script.
//!
//! Nothing here touches the DOM. The WASM front-end reads geometry and
//! events from the browser, asks these types what should change, and applies
//! the answer as marker classes and inline styles.

pub mod anchor;
pub mod config;
pub mod constants;
pub mod error;
pub mod marquee;
pub mod menu;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod sections;

pub use anchor::*;
pub use config::*;
pub use constants::*;
pub use error::BehaviorError;
pub use marquee::*;
pub use menu::*;
pub use nav::*;
pub use parallax::*;
pub use reveal::*;
pub use sections::*;
