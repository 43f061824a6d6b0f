//! Zi Wei Dou Shu natal charts and horoscopes.
//!
//! This crate provides:
//! - Chart casting from a solar birth date, time index and gender
//! - Placement of the 14 major, 14 minor and 38 (or 40) adjective stars
//! - The four twelve-god decorative cycles
//! - Decadal (大限) and small-limit (小限) partitions
//! - Horoscope layers from decade down to hour, with flowing stars and mutagens
//! - Palace, star and surrounded-palace queries
//!
//! Calendar answers come from a [`ziwei_calendar::CalendarOracle`]; the
//! engine itself is deterministic table lookup and ring arithmetic.

pub mod adjective_star;
pub mod chart;
pub mod config;
pub mod decadal;
pub mod decorative;
pub mod error;
pub mod flowing_star;
pub mod horoscope;
pub mod major_star;
pub mod minor_star;
pub mod palace;
pub mod soul_body;
pub mod surrounded;

pub use chart::Chart;
pub use config::{AgeConvention, Algorithm, BirthInput, ChartConfig};
pub use decadal::{DecadalRange, SMALL_LIMIT_CYCLES};
pub use decorative::{Boshi12, Changsheng12, Jiangqian12, Suiqian12};
pub use error::ChartError;
pub use flowing_star::{ScopedStar, flowing_stars};
pub use horoscope::{CHILDHOOD_PALACES, Horoscope, HoroscopeLayer, mutagens_to_stars, nominal_age};
pub use palace::{Palace, PlacedStar};
pub use surrounded::{SurroundedIndices, SurroundedPalaces, surrounded_indices};
