// Released under MIT License.
// Copyright (c) 2024-2025 Ladislav Bartos

//! Analytical steady state of the Langmuir-Hinshelwood CO oxidation model.

use getset::CopyGetters;
use log::debug;
use std::io::Write;

use crate::errors::ModelError;
use crate::structures::cluster::Cluster;
use crate::structures::cluster_expansion::ClusterExpansion;
use crate::structures::species::Species;
use crate::structures::species_list::SpeciesList;

/// Langmuir-Hinshelwood model of CO oxidation on a surface with a single site type.
///
/// CO adsorbs molecularly, O2 adsorbs dissociatively, and adsorbed CO reacts
/// with neighboring adsorbed O producing CO2. With adsorption in equilibrium,
/// the steady state coverages at CO molar fraction `x` are
///
/// ```text
/// θ_O  = sqrt(B_O2 (1 - x)) / D
/// θ_CO = B_CO x / D
/// D    = 1 + B_CO x + sqrt(B_O2 (1 - x))
/// ```
///
/// and the turnover frequency of CO2 is `coordination · A_oxi · θ_CO · θ_O`.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct LangmuirHinshelwood {
    /// Ratio of pre-exponential factors of CO adsorption and desorption.
    b_co: f64,
    /// Ratio of pre-exponential factors of O2 adsorption and desorption.
    b_o2: f64,
    /// Pre-exponential factor of CO oxidation.
    a_oxi: f64,
    /// Number of neighbors of each site.
    coordination: usize,
}

/// Steady state of the model at a specific CO molar fraction.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct SteadyState {
    /// Molar fraction of CO in the gas phase.
    x_co: f64,
    /// Fraction of sites covered by O.
    coverage_o: f64,
    /// Fraction of sites covered by CO.
    coverage_co: f64,
    /// Turnover frequency of CO2.
    tof_co2: f64,
}

impl LangmuirHinshelwood {
    /// Create a new model on a lattice with coordination number of 6.
    ///
    /// ## Returns
    /// `LangmuirHinshelwood` if all parameters are positive and finite.
    /// `ModelError::InvalidParameter` otherwise.
    pub fn new(b_co: f64, b_o2: f64, a_oxi: f64) -> Result<Self, ModelError> {
        for (name, value) in [("B_CO", b_co), ("B_O2", b_o2), ("A_oxi", a_oxi)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ModelError::InvalidParameter(name.to_owned(), value));
            }
        }

        Ok(LangmuirHinshelwood {
            b_co,
            b_o2,
            a_oxi,
            coordination: 6,
        })
    }

    /// Set the number of neighbors of each site.
    pub fn with_coordination(mut self, coordination: usize) -> Self {
        self.coordination = coordination;
        self
    }

    /// Calculate the steady state at the given CO molar fraction.
    ///
    /// ## Returns
    /// `SteadyState` if `x_co` lies in [0, 1]. `ModelError::FractionOutOfRange` otherwise.
    ///
    /// ## Example
    /// ```
    /// # use zacros_rs::prelude::*;
    /// # use float_cmp::assert_approx_eq;
    /// let model = LangmuirHinshelwood::new(1.0, 1.25, 1.0).unwrap();
    /// let state = model.steady_state(1.0).unwrap();
    ///
    /// assert_approx_eq!(f64, state.coverage_o(), 0.0);
    /// assert_approx_eq!(f64, state.coverage_co(), 0.5);
    /// ```
    pub fn steady_state(&self, x_co: f64) -> Result<SteadyState, ModelError> {
        if !(0.0..=1.0).contains(&x_co) {
            return Err(ModelError::FractionOutOfRange(x_co));
        }

        Ok(self.evaluate(x_co))
    }

    /// Get the CO molar fraction at which CO and O coverages are equal.
    ///
    /// ## Notes
    /// - This is a close approximation of the fraction with the highest turnover
    ///   frequency, see `LangmuirHinshelwood::max_tof_fraction` for the exact value.
    /// - Depends only on `B_O2 / B_CO²`.
    pub fn equal_coverage_fraction(&self) -> f64 {
        let b_co2 = self.b_co * self.b_co;
        (self.b_o2 / (2.0 * b_co2)) * ((1.0 + 4.0 * b_co2 / self.b_o2).sqrt() - 1.0)
    }

    /// Get the CO molar fraction with the highest turnover frequency of CO2.
    /// Obtained numerically using golden-section search.
    pub fn max_tof_fraction(&self) -> f64 {
        const TOLERANCE: f64 = 1e-10;
        let ratio = (5.0f64.sqrt() - 1.0) / 2.0;

        let (mut low, mut high) = (0.0, 1.0);
        let mut x1 = high - ratio * (high - low);
        let mut x2 = low + ratio * (high - low);
        let mut tof1 = self.evaluate(x1).tof_co2;
        let mut tof2 = self.evaluate(x2).tof_co2;

        while high - low > TOLERANCE {
            if tof1 < tof2 {
                low = x1;
                x1 = x2;
                tof1 = tof2;
                x2 = low + ratio * (high - low);
                tof2 = self.evaluate(x2).tof_co2;
            } else {
                high = x2;
                x2 = x1;
                tof2 = tof1;
                x1 = high - ratio * (high - low);
                tof1 = self.evaluate(x1).tof_co2;
            }
        }

        (low + high) / 2.0
    }

    /// Calculate steady states for `n_points` CO molar fractions evenly spaced over [0, 1].
    ///
    /// ## Returns
    /// Vector of steady states if `n_points` is at least 2. `ModelError::TooFewPoints` otherwise.
    pub fn scan(&self, n_points: usize) -> Result<Vec<SteadyState>, ModelError> {
        if n_points < 2 {
            return Err(ModelError::TooFewPoints(n_points));
        }

        let step = (n_points - 1) as f64;
        Ok((0..n_points)
            .map(|i| self.evaluate(i as f64 / step))
            .collect())
    }

    /// Get the species of the model: `CO*`, `O*`, `CO`, `O2`, and `CO2`.
    pub fn species(&self) -> SpeciesList {
        let make = |symbol: &str| {
            Species::new(symbol).expect(
                "FATAL ZACROS ERROR | LangmuirHinshelwood::species | Model species should be valid.",
            )
        };

        vec![
            make("CO*").with_denticity(1),
            make("O*").with_denticity(1),
            make("CO"),
            make("O2"),
            make("CO2").with_gas_energy(-2.337),
        ]
        .into()
    }

    /// Get the cluster expansion of the model: single CO and O adsorbed on an `f` site
    /// with zero energies.
    pub fn cluster_expansion(&self) -> ClusterExpansion {
        self.species()
            .iter()
            .filter(|s| s.is_adsorbed())
            .map(|s| {
                Cluster::new(&["f"], &[], vec![s.clone()])
                    .expect("FATAL ZACROS ERROR | LangmuirHinshelwood::cluster_expansion | Point cluster should be valid.")
                    .with_multiplicity(1)
            })
            .collect()
    }

    /// Write a table of coverages and turnover frequencies for `n_points` CO molar fractions
    /// evenly spaced over [0, 1].
    ///
    /// ## Example
    /// Output for `n_points = 2`:
    /// ```text
    /// ------------------------------------------------
    /// cond     x_CO       ac_O      ac_CO      TOF_CO2
    /// ------------------------------------------------
    ///    0     0.00   0.527864   0.000000     0.000000
    ///    1     1.00   0.000000   0.500000     0.000000
    /// ```
    pub fn write_summary(&self, stream: &mut impl Write, n_points: usize) -> Result<(), ModelError> {
        let states = self.scan(n_points)?;
        debug!(
            "Writing summary of {} steady states of the Langmuir-Hinshelwood model.",
            states.len()
        );

        let separator = "-".repeat(48);
        writeln!(stream, "{}", separator).map_err(|_| ModelError::CouldNotWrite)?;
        writeln!(
            stream,
            "{:>4} {:>8} {:>10} {:>10} {:>12}",
            "cond", "x_CO", "ac_O", "ac_CO", "TOF_CO2"
        )
        .map_err(|_| ModelError::CouldNotWrite)?;
        writeln!(stream, "{}", separator).map_err(|_| ModelError::CouldNotWrite)?;

        for (i, state) in states.iter().enumerate() {
            writeln!(
                stream,
                "{:4} {:8.2} {:10.6} {:10.6} {:12.6}",
                i, state.x_co, state.coverage_o, state.coverage_co, state.tof_co2
            )
            .map_err(|_| ModelError::CouldNotWrite)?;
        }

        Ok(())
    }

    fn evaluate(&self, x_co: f64) -> SteadyState {
        let oxygen = (self.b_o2 * (1.0 - x_co)).sqrt();
        let carbon_monoxide = self.b_co * x_co;
        let denominator = 1.0 + carbon_monoxide + oxygen;

        let coverage_o = oxygen / denominator;
        let coverage_co = carbon_monoxide / denominator;

        SteadyState {
            x_co,
            coverage_o,
            coverage_co,
            tof_co2: self.coordination as f64 * self.a_oxi * coverage_co * coverage_o,
        }
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/
