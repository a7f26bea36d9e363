//! Feature Tour - Runnable Examples
//!
//! Three small, independent demonstrations:
//! - [`accessor`]: a compile-time checked property accessor
//! - [`shape`]: a closed sum type with exhaustive matching
//! - [`delay`]: one mocked async operation consumed three ways
//!
//! Run any demo with:
//! ```bash
//! cargo run --bin <demo_name>
//! ```

pub mod accessor;
pub mod config;
pub mod delay;
pub mod error;
pub mod logging;
pub mod shape;

pub use accessor::{get_property, lens, Key, Lens, Property};
pub use config::TourConfig;
pub use delay::{MockSource, Style, DATA_LOADED};
pub use error::{ConfigError, FetchError, ShapeError, TourError};
pub use shape::{area, Shape};
