// Released under MIT License.
// Copyright (c) 2024-2025 Ladislav Bartos

//! Implementation of the Formula structure used to obtain compositions and masses of species.

use indexmap::IndexMap;
use regex::Regex;
use std::iter::Peekable;
use std::sync::OnceLock;

use crate::errors::{ParseFormulaError, SpeciesError};
use crate::structures::element::SupportedElements;

/// Elemental composition of a species parsed from its symbol.
///
/// ## Grammar
/// A formula is a sequence of element symbols (an uppercase letter optionally followed
/// by a lowercase letter) and parenthesized groups, each optionally followed by a count.
/// Trailing `*` characters marking adsorbed species are ignored, so `"CO2*"`,
/// `"Pt(CO)2*"`, and `"*"` (empty site with empty composition) are all valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    /// Formula as it was provided.
    symbol: String,
    /// Number of atoms of each element in order of first appearance.
    composition: IndexMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Open,
    Close,
    Element(&'a str),
    Count(&'a str),
}

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| {
        Regex::new(r"\(|\)|[A-Z][a-z]?|[0-9]+")
            .expect("FATAL ZACROS ERROR | formula::token_regex | Could not compile regular expression.")
    })
}

impl Formula {
    /// Parse the provided species symbol.
    ///
    /// ## Example
    /// ```
    /// # use zacros_rs::prelude::*;
    /// let formula = Formula::parse("CH3(CH2)2OH*").unwrap();
    /// assert_eq!(formula.count("C"), 3);
    /// assert_eq!(formula.count("H"), 8);
    /// assert_eq!(formula.count("O"), 1);
    /// ```
    pub fn parse(symbol: &str) -> Result<Self, ParseFormulaError> {
        let tokens = Formula::tokenize(symbol)?;
        let mut iter = tokens.into_iter().peekable();

        let mut stack: Vec<IndexMap<String, usize>> = vec![IndexMap::new()];

        while let Some(token) = iter.next() {
            match token {
                Token::Element(element) => {
                    let count = Formula::read_count(symbol, &mut iter)?;
                    let current = stack
                        .last_mut()
                        .ok_or_else(|| ParseFormulaError::UnbalancedParentheses(symbol.to_owned()))?;
                    Formula::add(symbol, current, element, count)?;
                }
                Token::Open => stack.push(IndexMap::new()),
                Token::Close => {
                    let group = stack
                        .pop()
                        .ok_or_else(|| ParseFormulaError::UnbalancedParentheses(symbol.to_owned()))?;
                    let multiplier = Formula::read_count(symbol, &mut iter)?;
                    let current = stack
                        .last_mut()
                        .ok_or_else(|| ParseFormulaError::UnbalancedParentheses(symbol.to_owned()))?;

                    for (element, count) in group.iter() {
                        let total = count
                            .checked_mul(multiplier)
                            .ok_or_else(|| ParseFormulaError::CountOverflow(symbol.to_owned()))?;
                        Formula::add(symbol, current, element, total)?;
                    }
                }
                // count that does not follow an element or a group
                Token::Count(digits) => {
                    return Err(ParseFormulaError::UnexpectedCharacter(
                        symbol.to_owned(),
                        digits.chars().next().unwrap_or('0'),
                    ))
                }
            }
        }

        let composition = match stack.pop() {
            Some(x) if stack.is_empty() => x,
            _ => return Err(ParseFormulaError::UnbalancedParentheses(symbol.to_owned())),
        };

        Ok(Formula {
            symbol: symbol.to_owned(),
            composition,
        })
    }

    /// Get the formula as it was provided.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the number of atoms of each element in order of their first appearance.
    pub fn composition(&self) -> &IndexMap<String, usize> {
        &self.composition
    }

    /// Get the number of atoms of the given element.
    pub fn count(&self, element: &str) -> usize {
        self.composition.get(element).copied().unwrap_or(0)
    }

    /// Get the total number of atoms.
    pub fn n_atoms(&self) -> usize {
        self.composition.values().sum()
    }

    /// Check whether the formula contains no atoms (e.g. for an empty adsorption site `*`).
    pub fn is_empty(&self) -> bool {
        self.composition.is_empty()
    }

    /// Calculate the mass of the formula in daltons.
    ///
    /// ## Returns
    /// Mass if all elements are supported. `SpeciesError::UnknownElement` otherwise.
    pub fn mass(&self, elements: &SupportedElements) -> Result<f64, SpeciesError> {
        let mut mass = 0.0;
        for (element, &count) in self.composition.iter() {
            let element_mass = elements.mass_of(element).ok_or_else(|| {
                SpeciesError::UnknownElement(self.symbol.clone(), element.clone())
            })?;

            mass += element_mass * count as f64;
        }

        Ok(mass)
    }

    /// Split the symbol into tokens. Trailing `*` are ignored.
    fn tokenize(symbol: &str) -> Result<Vec<Token<'_>>, ParseFormulaError> {
        let body = symbol.trim_end_matches('*');

        let mut tokens = Vec::new();
        let mut last_end = 0;

        for m in token_regex().find_iter(body) {
            if m.start() != last_end {
                return Err(Formula::unexpected(symbol, &body[last_end..]));
            }

            let token = match m.as_str() {
                "(" => Token::Open,
                ")" => Token::Close,
                s if s.starts_with(|c: char| c.is_ascii_digit()) => Token::Count(s),
                s => Token::Element(s),
            };

            tokens.push(token);
            last_end = m.end();
        }

        if last_end != body.len() {
            return Err(Formula::unexpected(symbol, &body[last_end..]));
        }

        Ok(tokens)
    }

    /// Read an optional count following an element or a group.
    fn read_count<'a>(
        symbol: &str,
        iter: &mut Peekable<impl Iterator<Item = Token<'a>>>,
    ) -> Result<usize, ParseFormulaError> {
        let digits = match iter.peek() {
            Some(Token::Count(digits)) => *digits,
            _ => return Ok(1),
        };
        iter.next();

        match digits.parse::<usize>() {
            Ok(0) => Err(ParseFormulaError::ZeroCount(symbol.to_owned())),
            Ok(x) => Ok(x),
            Err(_) => Err(ParseFormulaError::CountOverflow(symbol.to_owned())),
        }
    }

    /// Add atoms of an element into the composition.
    fn add(
        symbol: &str,
        composition: &mut IndexMap<String, usize>,
        element: &str,
        count: usize,
    ) -> Result<(), ParseFormulaError> {
        let entry = composition.entry(element.to_owned()).or_insert(0);
        *entry = entry
            .checked_add(count)
            .ok_or_else(|| ParseFormulaError::CountOverflow(symbol.to_owned()))?;

        Ok(())
    }

    fn unexpected(symbol: &str, rest: &str) -> ParseFormulaError {
        ParseFormulaError::UnexpectedCharacter(symbol.to_owned(), rest.chars().next().unwrap_or(' '))
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/
