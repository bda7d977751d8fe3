// Released under MIT License.
// Copyright (c) 2024-2025 Ladislav Bartos

//! Implementation of the SupportedElements structure and its methods.

use indexmap::IndexMap;
use log::debug;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use crate::errors::ParseElementError;

/// Contains information about all elements that can occur in species formulas.
#[derive(Debug, Clone)]
pub struct SupportedElements {
    /// All supported elements.
    /// Keys are names of the elements.
    elements: IndexMap<String, Element>,
    /// Map converting element symbol to element name.
    symbols2names: IndexMap<String, String>,
}

/// Contains information about specific element.
#[derive(Debug, Clone, PartialEq)]
struct Element {
    /// Symbol of the element.
    symbol: String,
    /// Atomic mass of the element in amu (daltons).
    mass: f64,
}

static DEFAULT_ELEMENTS: OnceLock<SupportedElements> = OnceLock::new();

impl Default for SupportedElements {
    /// Construct a default `SupportedElements` structure.
    ///
    /// ## Notes
    /// - This function parses YAML content from `src/config/elements.yaml`
    ///   which is included in the `zacros_rs` library at compile time.
    /// - This is a relatively slow operation. Use `SupportedElements::global`
    ///   to access a shared, already parsed copy.
    fn default() -> Self {
        let yaml = include_str!("../config/elements.yaml");

        SupportedElements::new_from_string(yaml)
            .expect("FATAL ZACROS ERROR | SupportedElements::default | Default `elements.yaml` file could not be parsed.")
    }
}

impl SupportedElements {
    /// Get a reference to the default `SupportedElements` structure.
    /// The structure is constructed on first access and shared afterwards.
    pub fn global() -> &'static SupportedElements {
        DEFAULT_ELEMENTS.get_or_init(|| {
            debug!("Loading the default table of supported elements.");
            SupportedElements::default()
        })
    }

    /// Construct a new `SupportedElements` structure from the provided YAML file.
    ///
    /// ## Returns
    /// `SupportedElements` structure if parsing was successful.
    /// `ParseElementError` otherwise.
    ///
    /// ## Notes
    /// - For an example of the 'elements yaml file', see `src/config/elements.yaml`.
    pub fn new_from_file(filename: impl AsRef<Path>) -> Result<Self, ParseElementError> {
        SupportedElements::new_from_string(&SupportedElements::load_yaml_to_string(filename)?)
    }

    /// Parse yaml string into `SupportedElements` structure.
    fn new_from_string(yaml: &str) -> Result<Self, ParseElementError> {
        let elements: IndexMap<String, Element> =
            serde_yaml::from_str(yaml).map_err(ParseElementError::CouldNotParseYaml)?;

        let symbols2names = SupportedElements::make_symbols2names(&elements)?;

        Ok(SupportedElements {
            elements,
            symbols2names,
        })
    }

    /// Update `SupportedElements` structure using data from the provided YAML file.
    ///
    /// ## Returns
    /// `Ok` if the parsing was successful.
    /// `ParseElementError` otherwise. If an error occurs, the `SupportedElements` structure is not changed.
    ///
    /// ## Example
    /// Let's suppose that you need deuterium in your species formulas
    /// and that you want to use a more precise mass for platinum.
    /// The yaml file, `my_elements.yaml`, should look like this:
    /// ```yaml
    /// ---
    /// platinum:
    ///   symbol: Pt
    ///   mass: 195.084
    /// deuterium:
    ///   symbol: D
    ///   mass: 2.014
    /// ...
    /// ```
    ///
    /// The modified `SupportedElements` structure can be obtained using:
    /// ```no_run
    /// # use zacros_rs::prelude::*;
    /// #
    /// let mut elements = SupportedElements::default();
    /// elements.update_from_file("my_elements.yaml").unwrap();
    /// ```
    pub fn update_from_file(&mut self, filename: impl AsRef<Path>) -> Result<(), ParseElementError> {
        let parsed = SupportedElements::new_from_file(filename)?;

        let mut merged = self.elements.clone();
        for (name, element) in parsed.elements.into_iter() {
            // replacing the value keeps the original position of the element
            merged.insert(name, element);
        }

        // symbols may have been switched between elements, so only the final table is checked
        let symbols2names = SupportedElements::make_symbols2names(&merged)?;

        self.elements = merged;
        self.symbols2names = symbols2names;

        Ok(())
    }

    /// Get the mass of the element with the given symbol.
    /// Returns `None` if the element is not supported.
    pub fn mass_of(&self, symbol: &str) -> Option<f64> {
        let name = self.symbols2names.get(symbol)?;
        self.elements.get(name).map(|element| element.mass)
    }

    /// Get the name of the element with the given symbol.
    pub fn name_of(&self, symbol: &str) -> Option<&str> {
        self.symbols2names.get(symbol).map(|name| name.as_str())
    }

    /// Check whether the element with the given symbol is supported.
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols2names.contains_key(symbol)
    }

    /// Get the number of supported elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check whether there are no supported elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Opens the specified file and loads its contents into a string.
    fn load_yaml_to_string(filename: impl AsRef<Path>) -> Result<String, ParseElementError> {
        let mut yaml_file = File::open(&filename)
            .map_err(|_| ParseElementError::FileNotFound(Box::from(filename.as_ref())))?;

        let mut yaml_string = String::new();
        yaml_file
            .read_to_string(&mut yaml_string)
            .map_err(|_| ParseElementError::FileCouldNotBeRead(Box::from(filename.as_ref())))?;

        Ok(yaml_string)
    }

    /// Creates new `symbols2names` map from the provided `elements`.
    fn make_symbols2names(
        elements: &IndexMap<String, Element>,
    ) -> Result<IndexMap<String, String>, ParseElementError> {
        let mut symbols2names = IndexMap::new();

        for (name, element) in elements.iter() {
            if let Some(previous) = symbols2names.insert(element.symbol.clone(), name.clone()) {
                return Err(ParseElementError::DuplicateSymbol(
                    element.symbol.clone(),
                    previous,
                    name.clone(),
                ));
            }
        }

        Ok(symbols2names)
    }
}

/// Handles parsing of the yaml file and basic sanity checks.
struct ElementVisitor;

impl<'de> Visitor<'de> for ElementVisitor {
    type Value = Element;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("struct Element")
    }

    fn visit_map<V>(self, mut map: V) -> Result<Element, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut symbol: Option<String> = None;
        let mut mass: Option<f64> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "symbol" => {
                    let value: String = map.next_value()?;
                    if value.trim().is_empty() {
                        return Err(de::Error::custom("symbol is empty"));
                    }
                    symbol = Some(value);
                }
                "mass" => {
                    let value: f64 = map.next_value()?;
                    if value < 0.0 || !value.is_finite() {
                        return Err(de::Error::custom("mass is negative"));
                    }
                    mass = Some(value);
                }
                _ => return Err(de::Error::unknown_field(&key, FIELDS)),
            }
        }

        let symbol = symbol.ok_or_else(|| de::Error::missing_field("symbol"))?;
        let mass = mass.ok_or_else(|| de::Error::missing_field("mass"))?;

        Ok(Element { symbol, mass })
    }
}

const FIELDS: &[&str] = &["symbol", "mass"];

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("Element", FIELDS, ElementVisitor)
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/
