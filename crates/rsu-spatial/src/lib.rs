//! `rsu-spatial` — grid geometry, junction snapping, and spatial indexing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`grid`]     | `Grid`, `Cell`, `SpacingReport`                            |
//! | [`junction`] | `Junction`, `JunctionSet` (nearest junction + offset)      |
//! | [`resolver`] | `CellResolver` — cell → snapped, offset-corrected point    |
//! | [`reach`]    | `ReachIndex` — R-tree "within radius" queries              |
//! | [`loader`]   | `load_junctions_csv`, `load_junctions_reader`              |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                         |

pub mod error;
pub mod grid;
pub mod junction;
pub mod loader;
pub mod reach;
pub mod resolver;


pub use error::{SpatialError, SpatialResult};
pub use grid::{Cell, Grid, SpacingReport};
pub use junction::{Junction, JunctionSet};
pub use loader::{load_junctions_csv, load_junctions_reader};
pub use reach::ReachIndex;
pub use resolver::CellResolver;
