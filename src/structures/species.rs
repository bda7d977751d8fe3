// Released under MIT License.
// Copyright (c) 2024-2025 Ladislav Bartos

//! Implementation of the Species structure and its methods.

use getset::CopyGetters;
use std::fmt;

use crate::errors::SpeciesError;
use crate::structures::element::SupportedElements;
use crate::structures::formula::Formula;

/// Chemical species participating in the kinetic model.
///
/// Species with symbols ending with `*` are adsorbed on the surface,
/// all other species are in the gas phase. The symbol `*` alone
/// denotes an empty adsorption site.
#[derive(Debug, Clone, PartialEq, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct Species {
    /// Symbol of the species, e.g. `CO*` or `O2`.
    symbol: String,
    /// Number of adsorption sites the species binds to.
    #[getset(get_copy = "pub")]
    denticity: usize,
    /// Formation energy of the species in the gas phase (in eV).
    #[getset(get_copy = "pub")]
    gas_energy: f64,
    /// Molecular mass of the species (in Da).
    #[getset(get_copy = "pub")]
    mass: f64,
}

impl Species {
    /// Create a new `Species` with the specified symbol.
    /// Mass of the species is calculated from its symbol using the default table of elements.
    ///
    /// ## Returns
    /// `Species` with denticity of 0 and gas energy of 0.0 if the symbol is a valid formula
    /// composed of supported elements. `SpeciesError` otherwise.
    ///
    /// ## Example
    /// ```
    /// # use zacros_rs::prelude::*;
    /// # use float_cmp::assert_approx_eq;
    /// let co = Species::new("CO*").unwrap().with_denticity(1);
    ///
    /// assert!(co.is_adsorbed());
    /// assert_eq!(co.denticity(), 1);
    /// assert_approx_eq!(f64, co.mass(), 28.010, epsilon = 1e-6);
    /// ```
    pub fn new(symbol: &str) -> Result<Self, SpeciesError> {
        Species::new_with_elements(symbol, SupportedElements::global())
    }

    /// Create a new `Species` calculating its mass using the provided table of elements.
    pub fn new_with_elements(
        symbol: &str,
        elements: &SupportedElements,
    ) -> Result<Self, SpeciesError> {
        let formula = Formula::parse(symbol)
            .map_err(|e| SpeciesError::InvalidFormula(symbol.to_owned(), e))?;

        Ok(Species {
            symbol: symbol.to_owned(),
            denticity: 0,
            gas_energy: 0.0,
            mass: formula.mass(elements)?,
        })
    }

    /// Create a new `Species` with an explicitly provided mass (in Da).
    /// The symbol is not interpreted as a chemical formula, so any symbol accepted
    /// by Zacros (e.g. `CO_bridge*`) can be used.
    ///
    /// ## Example
    /// ```
    /// # use zacros_rs::prelude::*;
    /// # use float_cmp::assert_approx_eq;
    /// let co = Species::new_with_mass("CO_bridge*", 28.010).with_denticity(2);
    ///
    /// assert!(co.is_adsorbed());
    /// assert_approx_eq!(f64, co.mass(), 28.010);
    /// ```
    pub fn new_with_mass(symbol: &str, mass: f64) -> Self {
        Species {
            symbol: symbol.to_owned(),
            denticity: 0,
            gas_energy: 0.0,
            mass,
        }
    }

    /// Set the number of adsorption sites the species binds to.
    pub fn with_denticity(mut self, denticity: usize) -> Self {
        self.denticity = denticity;
        self
    }

    /// Set the gas phase formation energy of the species (in eV).
    pub fn with_gas_energy(mut self, gas_energy: f64) -> Self {
        self.gas_energy = gas_energy;
        self
    }

    /// Override the mass calculated from the symbol of the species (in Da).
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Get the symbol of the species.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns `true` if the species is bound to the surface.
    pub fn is_adsorbed(&self) -> bool {
        self.symbol.ends_with('*')
    }

    /// Returns `true` if the species is an empty adsorption site.
    pub fn is_free_site(&self) -> bool {
        self.symbol.chars().all(|c| c == '*') && !self.symbol.is_empty()
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ParseFormulaError;
    use float_cmp::assert_approx_eq;

    #[test]
    fn new_adsorbed() {
        let species = Species::new("H2*").unwrap().with_denticity(1);

        assert_eq!(species.symbol(), "H2*");
        assert_eq!(species.denticity(), 1);
        assert_approx_eq!(f64, species.gas_energy(), 0.0);
        assert_approx_eq!(f64, species.mass(), 2.016);
        assert!(species.is_adsorbed());
        assert!(!species.is_free_site());
        assert_eq!(species.to_string(), "H2*");
    }

    #[test]
    fn new_gas() {
        let species = Species::new("CO2").unwrap().with_gas_energy(-2.337);

        assert_eq!(species.symbol(), "CO2");
        assert_eq!(species.denticity(), 0);
        assert_approx_eq!(f64, species.gas_energy(), -2.337);
        assert_approx_eq!(f64, species.mass(), 44.009, epsilon = 1e-9);
        assert!(!species.is_adsorbed());
        assert!(!species.is_free_site());
    }

    #[test]
    fn new_free_site() {
        let species = Species::new("*").unwrap();

        assert_eq!(species.denticity(), 0);
        assert_approx_eq!(f64, species.mass(), 0.0);
        assert!(species.is_adsorbed());
        assert!(species.is_free_site());
    }

    macro_rules! species_tests {
        ($name_prefix:ident, $symbol:expr, $mass:expr, $adsorbed:expr) => {
            paste::item! {
                #[test]
                fn [<$name_prefix _mass>]() {
                    let species = Species::new($symbol).unwrap();
                    assert_approx_eq!(f64, species.mass(), $mass, epsilon = 1e-9);
                }

                #[test]
                fn [<$name_prefix _phase>]() {
                    let species = Species::new($symbol).unwrap();
                    assert_eq!(species.is_adsorbed(), $adsorbed);
                }
            }
        };
    }

    species_tests!(water, "H2O", 18.015, false);
    species_tests!(hydroxyl, "OH*", 17.007, true);
    species_tests!(formate, "HCOO**", 45.017, true);
    species_tests!(platinum_carbonyl, "Pt(CO)2*", 251.1, true);
    species_tests!(nitric_oxide, "NO", 30.006, false);

    #[test]
    fn with_mass_override() {
        let species = Species::new("O*").unwrap().with_mass(16.0);
        assert_approx_eq!(f64, species.mass(), 16.0);
    }

    #[test]
    fn new_with_custom_elements() {
        let mut elements = SupportedElements::default();
        elements
            .update_from_file("test_files/elements_update.yaml")
            .unwrap();

        let species = Species::new_with_elements("D2", &elements).unwrap();
        assert_approx_eq!(f64, species.mass(), 4.028);

        // deuterium is not part of the default table
        match Species::new("D2") {
            Err(SpeciesError::UnknownElement(symbol, element)) => {
                assert_eq!(symbol, "D2");
                assert_eq!(element, "D");
            }
            Ok(_) => panic!("Function should have failed but it succeeded."),
            Err(e) => panic!(
                "Function failed successfully but incorrect error type `{}` was returned.",
                e
            ),
        }
    }

    #[test]
    fn new_without_formula() {
        // not a chemical formula
        assert!(Species::new("CO_bridge*").is_err());

        let species = Species::new_with_mass("CO_bridge*", 28.01)
            .with_denticity(2)
            .with_gas_energy(0.0);

        assert_eq!(species.symbol(), "CO_bridge*");
        assert_eq!(species.denticity(), 2);
        assert_approx_eq!(f64, species.mass(), 28.01);
        assert!(species.is_adsorbed());
        assert!(!species.is_free_site());

        let gas = Species::new_with_mass("cyclohexane", 84.162).with_gas_energy(-1.2);
        assert!(!gas.is_adsorbed());
        assert_approx_eq!(f64, gas.gas_energy(), -1.2);
    }

    #[test]
    fn new_invalid_formula() {
        match Species::new("co*") {
            Err(SpeciesError::InvalidFormula(symbol, e)) => {
                assert_eq!(symbol, "co*");
                assert_eq!(
                    e,
                    ParseFormulaError::UnexpectedCharacter("co*".to_owned(), 'c')
                );
            }
            Ok(_) => panic!("Function should have failed but it succeeded."),
            Err(e) => panic!(
                "Function failed successfully but incorrect error type `{}` was returned.",
                e
            ),
        }
    }
}

#[cfg(test)]
#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn species_to_yaml() {
        let species = Species::new("O2").unwrap().with_gas_energy(-0.5);

        let string = serde_yaml::to_string(&species).unwrap();
        let expected = "symbol: O2
denticity: 0
gas_energy: -0.5
mass: 31.998
";
        assert_eq!(string, expected);
    }

    #[test]
    fn species_from_yaml() {
        let string = "symbol: CO_bridge*
denticity: 2
gas_energy: 0.0
mass: 28.01
";

        let species: Species = serde_yaml::from_str(string).unwrap();
        assert_eq!(
            species,
            Species::new_with_mass("CO_bridge*", 28.01).with_denticity(2)
        );
        assert_approx_eq!(f64, species.mass(), 28.01);
    }

    #[test]
    fn species_yaml_roundtrip() {
        let species = Species::new("HCOO**").unwrap().with_denticity(2);

        let string = serde_yaml::to_string(&species).unwrap();
        let read: Species = serde_yaml::from_str(&string).unwrap();

        assert_eq!(read, species);
    }

    #[test]
    fn species_from_yaml_unknown_field() {
        let string = "symbol: O2
denticity: 0
gas_energy: 0.0
mass: 31.998
charge: 0
";

        match serde_yaml::from_str::<Species>(string) {
            Ok(_) => panic!("Deserialization should have failed but it succeeded."),
            Err(e) => assert!(
                e.to_string().contains("unknown field"),
                "Unexpected message `{}`.",
                e
            ),
        }
    }
}
