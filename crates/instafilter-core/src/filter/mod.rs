//! Filter catalog and intensity-driven parameter derivation.
//!
//! Each filter declares which of the five parameter kinds it accepts. A single
//! intensity slider value drives every parameter:
//!
//! | Kind        | Derived value                  |
//! |-------------|--------------------------------|
//! | `Intensity` | intensity                      |
//! | `Center`    | (width / 2, height / 2)        |
//! | `Radius`    | intensity * 100                |
//! | `Angle`     | intensity * π                  |
//! | `Scale`     | intensity * 20                 |
//!
//! Only the kinds a filter accepts are derived; the rest stay `None` and are
//! never handed to the engine.

pub mod catalog;
pub mod params;

pub use catalog::{find_filter, FilterSpec, ParamKind, DEFAULT_FILTER, FILTERS};
pub use params::{clamp_intensity, derive_params, FilterParams, Point, DEFAULT_INTENSITY};
