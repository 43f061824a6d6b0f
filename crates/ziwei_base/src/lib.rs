//! Closed vocabularies and ring arithmetic for Zi Wei Dou Shu charts.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches and the 60-pair sexagenary cycle
//! - The 12-slot palace ring (寅 = 0) with wraparound arithmetic
//! - Five-elements bureau classification
//! - Palace names, star identities, brightness and the four-transformation table
//!
//! Everything here is pure table lookup or modular arithmetic.

pub mod branch;
pub mod brightness;
pub mod error;
pub mod five_elements;
pub mod gender;
pub mod master;
pub mod mutagen;
pub mod palace_name;
pub mod ring;
pub mod sexagenary;
pub mod star;
pub mod stem;

pub use branch::{ALL_BRANCHES, EarthlyBranch, Season, TriHarmony};
pub use brightness::{Brightness, brightness};
pub use error::BaseError;
pub use five_elements::{FiveElementsClass, five_elements_class, five_elements_of};
pub use gender::Gender;
pub use master::{body_master, soul_master};
pub use mutagen::{ALL_MUTAGENS, Mutagen, mutagen_of, mutagen_star, mutagen_stars};
pub use palace_name::{
    ALL_PALACE_NAMES, PalaceName, palace_index_of, palace_name_at, palace_names,
};
pub use ring::{RING_SIZE, branch_at, branch_index, fix_index, fix12, jump, opposite, walk};
pub use sexagenary::StemBranch;
pub use star::{ALL_SCOPES, ALL_STARS, MAJOR_STARS, Scope, Star, StarId, StarKind};
pub use stem::{ALL_STEMS, HeavenlyStem, YinYang};
