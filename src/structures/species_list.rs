// Released under MIT License.
// Copyright (c) 2024-2025 Ladislav Bartos

//! Implementation of the SpeciesList structure and its methods.

use log::warn;
use std::fmt;
use std::io::Write;

use crate::auxiliary::{format_float, warning_prefix};
use crate::structures::species::Species;

/// Content of the `gas_molec_weights` column of the species block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightColumn {
    /// Write `XXX` for every gas species.
    /// This is the established output of the species block.
    #[default]
    Placeholder,
    /// Write masses of the gas species.
    Computed,
}

/// Ordered collection of species.
///
/// The order of the species is significant as it determines the order
/// of columns in the Zacros species block. Symbols do not have to be unique.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpeciesList {
    species: Vec<Species>,
}

impl SpeciesList {
    /// Create a new empty `SpeciesList`.
    pub fn new() -> Self {
        SpeciesList::default()
    }

    /// Add a species to the end of the list.
    ///
    /// ## Notes
    /// - Species with a symbol that is already present in the list are still added,
    ///   but a warning is logged.
    pub fn push(&mut self, species: Species) {
        if self.contains_symbol(species.symbol()) {
            warn!(
                "{} species `{}` is already present in the species list.",
                warning_prefix(),
                species.symbol()
            );
        }

        self.species.push(species);
    }

    /// Get the number of species in the list.
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Check whether the list contains no species.
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Get the species at the specified index.
    pub fn get(&self, index: usize) -> Option<&Species> {
        self.species.get(index)
    }

    /// Get the species of the list as a slice.
    pub fn as_slice(&self) -> &[Species] {
        &self.species
    }

    /// Iterate over the species in the list.
    pub fn iter(&self) -> std::slice::Iter<'_, Species> {
        self.species.iter()
    }

    /// Check whether a species with the provided symbol is present in the list.
    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.species.iter().any(|s| s.symbol() == symbol)
    }

    /// Iterate over the gas phase species of the list, keeping their order.
    pub fn gas_species(&self) -> impl Iterator<Item = &Species> {
        self.species.iter().filter(|s| !s.is_adsorbed())
    }

    /// Iterate over the adsorbed species of the list (including empty sites), keeping their order.
    pub fn adsorbed_species(&self) -> impl Iterator<Item = &Species> {
        self.species.iter().filter(|s| s.is_adsorbed())
    }

    /// Get the total mass of all species in the list (in Da).
    pub fn mass(&self) -> f64 {
        self.species.iter().map(|s| s.mass()).sum()
    }

    /// Get a displayable species block with the specified content of the weight column.
    pub fn display_with(&self, weights: WeightColumn) -> SpeciesBlock<'_> {
        SpeciesBlock {
            list: self,
            weights,
        }
    }

    /// Write the species block in Zacros format into the provided stream.
    ///
    /// ## Notes
    /// - The block is not terminated by a newline.
    pub fn write_zacros(&self, stream: &mut impl Write, weights: WeightColumn) -> std::io::Result<()> {
        write!(stream, "{}", self.display_with(weights))
    }
}

/// Species block of the Zacros simulation input.
/// Constructed using `SpeciesList::display_with`.
#[derive(Debug, Clone, Copy)]
pub struct SpeciesBlock<'a> {
    list: &'a SpeciesList,
    weights: WeightColumn,
}

impl fmt::Display for SpeciesBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gas: Vec<&Species> = self.list.gas_species().collect();
        let adsorbed: Vec<&Species> = self.list.adsorbed_species().collect();

        writeln!(f, "n_gas_species {}", gas.len())?;

        write!(f, "gas_specs_names   ")?;
        for species in gas.iter() {
            write!(f, "{:>10}", species.symbol())?;
        }
        writeln!(f)?;

        write!(f, "gas_energies      ")?;
        for species in gas.iter() {
            write!(f, "{:>10}", format_float(species.gas_energy()))?;
        }
        writeln!(f)?;

        write!(f, "gas_molec_weights ")?;
        for species in gas.iter() {
            match self.weights {
                WeightColumn::Placeholder => write!(f, "{:>10}", "XXX")?,
                WeightColumn::Computed => {
                    // rounding removes floating point noise from summing atomic masses
                    let mass = (species.mass() * 1e6).round() / 1e6;
                    write!(f, "{:>10}", format_float(mass))?
                }
            }
        }
        writeln!(f)?;

        writeln!(f)?;
        writeln!(f, "n_surf_species {}", adsorbed.len())?;

        write!(f, "surf_specs_names  ")?;
        for species in adsorbed.iter() {
            write!(f, "{:>10}", species.symbol())?;
        }
        writeln!(f)?;

        write!(f, "surf_specs_dent   ")?;
        for species in adsorbed.iter() {
            write!(f, "{:>10}", species.denticity())?;
        }

        Ok(())
    }
}

impl fmt::Display for SpeciesList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with(WeightColumn::Placeholder))
    }
}

impl From<Vec<Species>> for SpeciesList {
    fn from(species: Vec<Species>) -> Self {
        species.into_iter().collect()
    }
}

impl FromIterator<Species> for SpeciesList {
    fn from_iter<I: IntoIterator<Item = Species>>(iter: I) -> Self {
        let mut list = SpeciesList::new();
        for species in iter {
            list.push(species);
        }

        list
    }
}

impl<'a> IntoIterator for &'a SpeciesList {
    type Item = &'a Species;
    type IntoIter = std::slice::Iter<'a, Species>;

    fn into_iter(self) -> Self::IntoIter {
        self.species.iter()
    }
}

impl IntoIterator for SpeciesList {
    type Item = Species;
    type IntoIter = std::vec::IntoIter<Species>;

    fn into_iter(self) -> Self::IntoIter {
        self.species.into_iter()
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/
