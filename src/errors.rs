// Released under MIT License.
// Copyright (c) 2024-2025 Ladislav Bartos

//! Implementation of errors that can be returned by the `zacros_rs` library.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur when parsing a chemical formula.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFormulaError {
    #[error("Unexpected character `{1}` in formula `{0}`.")]
    UnexpectedCharacter(String, char),
    #[error("Unbalanced parentheses in formula `{0}`.")]
    UnbalancedParentheses(String),
    #[error("Formula `{0}` contains a zero count.")]
    ZeroCount(String),
    #[error("Formula `{0}` contains a count that is too large.")]
    CountOverflow(String),
}

/// Errors that can occur when constructing a Species.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpeciesError {
    #[error("Symbol `{0}` is not a valid chemical formula.")]
    InvalidFormula(String, #[source] ParseFormulaError),
    #[error("Element `{1}` of species `{0}` is not supported.")]
    UnknownElement(String, String),
}

/// Errors that can occur when constructing a Cluster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    #[error("Inconsistent dimensions for species ({0}) or site_types ({1}).")]
    InconsistentDimensions(usize, usize),
}

/// Errors that can occur when reading and parsing the yaml file with supported elements.
#[derive(Error, Debug)]
pub enum ParseElementError {
    #[error("File `{0}` was not found.")]
    FileNotFound(Box<Path>),
    #[error("File `{0}` could not be read.")]
    FileCouldNotBeRead(Box<Path>),
    #[error("Could not parse yaml input as elements: {0}")]
    CouldNotParseYaml(serde_yaml::Error),
    #[error("Symbol `{0}` is used by multiple elements (`{1}` and `{2}`).")]
    DuplicateSymbol(String, String, String),
}

/// Errors that can occur when writing an energetics file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteEnergeticsError {
    #[error("File `{0}` could not be created.")]
    CouldNotCreate(Box<Path>),
    #[error("Could not write line into file.")]
    CouldNotWrite,
}

/// Errors that can occur when evaluating the analytical kinetic models.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Parameter `{0}` must be positive and finite (got `{1}`).")]
    InvalidParameter(String, f64),
    #[error("Molar fraction `{0}` is outside the interval [0, 1].")]
    FractionOutOfRange(f64),
    #[error("At least two points are required for a scan (got `{0}`).")]
    TooFewPoints(usize),
    #[error("Could not write the summary table.")]
    CouldNotWrite,
}
