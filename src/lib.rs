// Released under MIT License.
// Copyright (c) 2024-2025 Ladislav Bartos

//! # zacros_rs: Zacros Input Library for Rust
//!
//! Rust library for constructing the chemical model of kinetic Monte Carlo simulations
//! performed with Zacros and writing it in the Zacros input format.
//!
//! ## Usage
//!
//! Run
//!
//! ```bash
//! $ cargo add zacros_rs
//! ```
//!
//! Import the crate in your Rust code:
//! ```
//! use zacros_rs::prelude::*;
//! ```
//!
//! ## Examples
//!
//! #### Defining species
//!
//! Species with symbols ending with `*` are adsorbed on the surface, other species are
//! in the gas phase. Masses of the species are calculated from their symbols.
//!
//! ```
//! use zacros_rs::prelude::*;
//! use std::error::Error;
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!     let species: SpeciesList = vec![
//!         Species::new("H2*")?.with_denticity(1),
//!         Species::new("O2*")?.with_denticity(1),
//!         Species::new("H2")?,
//!         Species::new("O2")?,
//!         Species::new("*")?,
//!     ]
//!     .into();
//!
//!     // write the species block of the simulation input
//!     println!("{}", species);
//!
//!     Ok(())
//! }
//! ```
//!
//! #### Constructing clusters
//!
//! ```
//! use zacros_rs::prelude::*;
//! use std::error::Error;
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!     let h = Species::new("H*")?.with_denticity(1);
//!
//!     // two neighboring hydrogen atoms adsorbed on `f` sites
//!     let cluster = Cluster::new(&["f", "f"], &[(1, 2)], vec![h.clone(), h])?
//!         .with_multiplicity(2)
//!         .with_cluster_energy(0.1);
//!
//!     assert_eq!(cluster.label(), "H*-f,H*-f:1-2");
//!
//!     // collect clusters into a cluster expansion and write the energetics file
//!     let mut expansion = ClusterExpansion::new();
//!     expansion.push(cluster);
//!     println!("{}", expansion);
//!
//!     Ok(())
//! }
//! ```
//!
//! #### Langmuir-Hinshelwood model
//!
//! Steady state coverages and CO2 production of the Langmuir-Hinshelwood CO oxidation model
//! can be calculated analytically.
//!
//! ```
//! use zacros_rs::prelude::*;
//! use std::error::Error;
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!     let model = LangmuirHinshelwood::new(1.0, 1.25, 1.0)?;
//!
//!     // CO molar fraction with equal coverages of CO and O
//!     let x = model.equal_coverage_fraction();
//!     assert!((x - 0.656).abs() < 1e-3);
//!
//!     // table of coverages and turnover frequencies
//!     model.write_summary(&mut std::io::stdout(), 21)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Supported elements
//! Masses of elements are read from a yaml table embedded in the library.
//! The table can be extended or modified using `SupportedElements::update_from_file`.
//!
//! ## Logging
//! `zacros_rs` reports suspicious but accepted input (e.g. duplicate species in a species list)
//! as warnings using the `log` crate. Initialize a logger (e.g. `env_logger`) to see them.
//!
//! ## Error handling
//! Error types of the library are not exported into the `prelude` module.
//! If you want to work with them directly, include them from the `errors` module:
//! ```
//! use zacros_rs::errors::ClusterError;
//! ```
//!
//! ## Features
//! - `serde`: serialization and deserialization of species, species lists, and clusters.
//!
//! ## License
//! This library is released under the MIT License.

/// Current version of the `zacros_rs` library.
pub const ZACROS_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod auxiliary;
pub mod errors;
pub mod models {
    pub mod langmuir_hinshelwood;
}
pub mod structures {
    pub mod cluster;
    pub mod cluster_expansion;
    pub mod element;
    pub mod formula;
    pub mod species;
    pub mod species_list;
}
mod test_utilities;

/// Reexported basic `zacros_rs` structures.
pub mod prelude {
    pub use crate::auxiliary::format_float;
    pub use crate::models::langmuir_hinshelwood::{LangmuirHinshelwood, SteadyState};
    pub use crate::structures::cluster::Cluster;
    pub use crate::structures::cluster_expansion::ClusterExpansion;
    pub use crate::structures::element::SupportedElements;
    pub use crate::structures::formula::Formula;
    pub use crate::structures::species::Species;
    pub use crate::structures::species_list::{SpeciesBlock, SpeciesList, WeightColumn};
}
