// Released under MIT License.
// Copyright (c) 2024-2025 Ladislav Bartos

//! Implementation of the Cluster structure and its methods.

use getset::CopyGetters;
use log::warn;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::Write;

use crate::auxiliary::{format_float, join, warning_prefix};
use crate::errors::ClusterError;
use crate::structures::species_list::SpeciesList;

/// Spatial pattern of lattice sites occupied by species.
/// Energetic contributions of clusters form the cluster expansion Hamiltonian of the lattice.
///
/// ## Identity
/// Two clusters are equal if and only if their labels are equal.
/// The label is derived from the species, site types, gas species, and neighboring sites,
/// so clusters differing only in `multiplicity` or `cluster_energy` **compare equal**
/// (and have the same hash). Keep this in mind when storing clusters in sets or maps.
///
/// ## Immutability
/// Fields of a `Cluster` can not be modified in place. Methods changing the cluster
/// consume it and recalculate its label and mass, so these always reflect its content.
#[derive(Debug, Clone, CopyGetters)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ClusterData", into = "ClusterData")
)]
pub struct Cluster {
    /// Types of the sites of the cluster.
    site_types: Vec<String>,
    /// Pairs of neighboring sites. Sites are indexed starting from 1.
    neighboring: Vec<(usize, usize)>,
    /// Species occupying the individual sites.
    species: SpeciesList,
    /// Gas phase species participating in the cluster without occupying a site.
    gas_species: SpeciesList,
    /// Graph multiplicity of the cluster pattern.
    #[getset(get_copy = "pub")]
    multiplicity: usize,
    /// Energy of the cluster (in eV).
    #[getset(get_copy = "pub")]
    cluster_energy: f64,
    /// Label identifying the cluster.
    label: String,
    /// Total mass of all species of the cluster (in Da).
    #[getset(get_copy = "pub")]
    mass: f64,
}

impl Cluster {
    /// Create a new `Cluster` from site types, pairs of neighboring sites, and species occupying the sites.
    /// The cluster has no gas species, multiplicity of 0, and energy of 0.0.
    ///
    /// ## Returns
    /// `Cluster` if the number of species matches the number of site types.
    /// `ClusterError::InconsistentDimensions` otherwise.
    ///
    /// ## Example
    /// ```
    /// # use zacros_rs::prelude::*;
    /// let h = Species::new("H*").unwrap().with_denticity(1);
    ///
    /// let cluster = Cluster::new(&["f", "f"], &[(1, 2)], vec![h.clone(), h])
    ///     .unwrap()
    ///     .with_multiplicity(2)
    ///     .with_cluster_energy(0.1);
    ///
    /// assert_eq!(cluster.label(), "H*-f,H*-f:1-2");
    /// assert_eq!(cluster.len(), 2);
    /// ```
    ///
    /// ## Notes
    /// - Sites in `neighboring` are indexed starting from 1.
    ///   Indices outside the cluster are accepted but a warning is logged.
    pub fn new(
        site_types: &[impl AsRef<str>],
        neighboring: &[(usize, usize)],
        species: impl Into<SpeciesList>,
    ) -> Result<Self, ClusterError> {
        let species = species.into();

        if species.len() != site_types.len() {
            return Err(ClusterError::InconsistentDimensions(
                species.len(),
                site_types.len(),
            ));
        }

        for &(i, j) in neighboring.iter() {
            if i == 0 || j == 0 || i > site_types.len() || j > site_types.len() {
                warn!(
                    "{} neighboring pair `{}-{}` refers to a site outside of the cluster with {} sites.",
                    warning_prefix(),
                    i,
                    j,
                    site_types.len()
                );
            }
        }

        let mut cluster = Cluster {
            site_types: site_types.iter().map(|s| s.as_ref().to_owned()).collect(),
            neighboring: neighboring.to_vec(),
            species,
            gas_species: SpeciesList::new(),
            multiplicity: 0,
            cluster_energy: 0.0,
            label: String::new(),
            mass: 0.0,
        };

        cluster.update_derived();
        Ok(cluster)
    }

    /// Set the gas species participating in the cluster.
    pub fn with_gas_species(mut self, gas_species: impl Into<SpeciesList>) -> Self {
        self.gas_species = gas_species.into();
        self.update_derived();
        self
    }

    /// Set the graph multiplicity of the cluster.
    pub fn with_multiplicity(mut self, multiplicity: usize) -> Self {
        self.multiplicity = multiplicity;
        self
    }

    /// Set the energy of the cluster (in eV).
    pub fn with_cluster_energy(mut self, cluster_energy: f64) -> Self {
        self.cluster_energy = cluster_energy;
        self
    }

    /// Get the label of the cluster.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the number of species occupying the sites of the cluster.
    /// Gas species are not counted.
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Check whether the cluster has no sites.
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Get the types of the sites of the cluster.
    pub fn site_types(&self) -> &[String] {
        &self.site_types
    }

    /// Get the pairs of neighboring sites. Sites are indexed starting from 1.
    pub fn neighboring(&self) -> &[(usize, usize)] {
        &self.neighboring
    }

    /// Get the species occupying the sites of the cluster.
    pub fn species(&self) -> &SpeciesList {
        &self.species
    }

    /// Get the gas species participating in the cluster.
    pub fn gas_species(&self) -> &SpeciesList {
        &self.gas_species
    }

    /// Write the cluster in Zacros format into the provided stream.
    ///
    /// ## Notes
    /// - The block is not terminated by a newline.
    pub fn write_zacros(&self, stream: &mut impl Write) -> std::io::Result<()> {
        write!(stream, "{}", self)
    }

    /// Recalculate label and mass of the cluster.
    fn update_derived(&mut self) {
        self.label = Cluster::make_label(
            &self.site_types,
            &self.neighboring,
            &self.species,
            &self.gas_species,
        );
        self.mass = self.species.mass() + self.gas_species.mass();
    }

    fn make_label(
        site_types: &[String],
        neighboring: &[(usize, usize)],
        species: &SpeciesList,
        gas_species: &SpeciesList,
    ) -> String {
        let mut label = join(
            species
                .iter()
                .zip(site_types.iter())
                .map(|(s, site)| format!("{}-{}", s.symbol(), site)),
            ",",
        );

        if !gas_species.is_empty() {
            label.push(':');
            label.push_str(&join(gas_species.iter().map(|s| s.symbol()), ","));
        }

        if !neighboring.is_empty() {
            label.push(':');
            label.push_str(&join(
                neighboring.iter().map(|(i, j)| format!("{}-{}", i, j)),
                ",",
            ));
        }

        label
    }
}

impl PartialEq for Cluster {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Cluster {}

impl Hash for Cluster {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cluster {}", self.label)?;

        if !self.gas_species.is_empty() {
            writeln!(
                f,
                "  # gas_species {}",
                join(self.gas_species.iter().map(|s| s.symbol()), " ")
            )?;
        }

        if !self.site_types.is_empty() {
            writeln!(f, "  sites {}", self.site_types.len())?;

            // the line is written even if there are no neighboring sites
            writeln!(
                f,
                "  neighboring {}",
                join(
                    self.neighboring.iter().map(|(i, j)| format!("{}-{}", i, j)),
                    " "
                )
            )?;

            writeln!(f, "  lattice_state")?;
            for (i, species) in self.species.iter().enumerate() {
                writeln!(
                    f,
                    "    {} {} {}",
                    i + 1,
                    species.symbol(),
                    species.denticity()
                )?;
            }

            writeln!(f, "  site_types {}", self.site_types.join(" "))?;
            writeln!(f, "  graph_multiplicity {}", self.multiplicity)?;
        }

        writeln!(f, "  cluster_eng {}", format_float(self.cluster_energy))?;
        write!(f, "end_cluster")
    }
}

/// Serialized form of a `Cluster`. Label and mass are recalculated when deserializing.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ClusterData {
    site_types: Vec<String>,
    neighboring: Vec<(usize, usize)>,
    species: SpeciesList,
    #[serde(default)]
    gas_species: SpeciesList,
    #[serde(default)]
    multiplicity: usize,
    #[serde(default)]
    cluster_energy: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<ClusterData> for Cluster {
    type Error = ClusterError;

    fn try_from(data: ClusterData) -> Result<Self, Self::Error> {
        Ok(Cluster::new(&data.site_types, &data.neighboring, data.species)?
            .with_gas_species(data.gas_species)
            .with_multiplicity(data.multiplicity)
            .with_cluster_energy(data.cluster_energy))
    }
}

#[cfg(feature = "serde")]
impl From<Cluster> for ClusterData {
    fn from(cluster: Cluster) -> Self {
        ClusterData {
            site_types: cluster.site_types,
            neighboring: cluster.neighboring,
            species: cluster.species,
            gas_species: cluster.gas_species,
            multiplicity: cluster.multiplicity,
            cluster_energy: cluster.cluster_energy,
        }
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/


#[cfg(test)]
#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;
    use crate::test_utilities::utilities::{gas, hydrogen_pair_cluster};
    use float_cmp::assert_approx_eq;

    const HYDROGEN_PAIR: &str = "site_types:
- f
- f
neighboring:
- [1, 2]
species:
- symbol: H*
  denticity: 1
  gas_energy: 0.0
  mass: 1.008
- symbol: H*
  denticity: 1
  gas_energy: 0.0
  mass: 1.5
gas_species:
- symbol: H2
  denticity: 0
  gas_energy: -0.2
  mass: 2.016
multiplicity: 2
cluster_energy: 0.1
";

    #[test]
    fn cluster_yaml_roundtrip() {
        let cluster = hydrogen_pair_cluster().with_gas_species(vec![gas("H2", -0.2)]);

        let string = serde_yaml::to_string(&cluster).unwrap();
        let read: Cluster = serde_yaml::from_str(&string).unwrap();

        assert_eq!(read.to_string(), cluster.to_string());
        assert_eq!(read.label(), cluster.label());
        assert_eq!(read.multiplicity(), cluster.multiplicity());
        assert_approx_eq!(f64, read.cluster_energy(), cluster.cluster_energy());
        assert_approx_eq!(f64, read.mass(), cluster.mass());

        assert_eq!(serde_yaml::to_string(&read).unwrap(), string);
    }

    #[test]
    fn cluster_to_yaml_has_no_derived_fields() {
        let string = serde_yaml::to_string(&hydrogen_pair_cluster()).unwrap();

        assert!(string.starts_with("site_types:\n"));
        assert!(!string.contains("label"));
        assert!(!string.contains("\nmass"));
    }

    #[test]
    fn cluster_from_yaml_recomputes_label_and_mass() {
        let cluster: Cluster = serde_yaml::from_str(HYDROGEN_PAIR).unwrap();

        assert_eq!(cluster.label(), "H*-f,H*-f:H2:1-2");
        assert_eq!(cluster.len(), 2);
        assert_eq!(cluster.gas_species().len(), 1);
        assert_eq!(cluster.multiplicity(), 2);
        assert_approx_eq!(f64, cluster.cluster_energy(), 0.1);
        assert_approx_eq!(f64, cluster.mass(), 1.008 + 1.5 + 2.016, epsilon = 1e-12);
    }

    #[test]
    fn cluster_from_yaml_defaults() {
        let string = "site_types: [f]
neighboring: []
species:
- symbol: O*
  denticity: 1
  gas_energy: 0.0
  mass: 15.999
";

        let cluster: Cluster = serde_yaml::from_str(string).unwrap();

        assert_eq!(cluster.label(), "O*-f");
        assert!(cluster.gas_species().is_empty());
        assert_eq!(cluster.multiplicity(), 0);
        assert_approx_eq!(f64, cluster.cluster_energy(), 0.0);
    }

    #[test]
    fn cluster_from_yaml_inconsistent_dimensions() {
        let string = HYDROGEN_PAIR.replacen("- f\n- f\n", "- f\n", 1);

        match serde_yaml::from_str::<Cluster>(&string) {
            Ok(_) => panic!("Deserialization should have failed but it succeeded."),
            Err(e) => assert!(
                e.to_string()
                    .contains(&ClusterError::InconsistentDimensions(2, 1).to_string()),
                "Unexpected message `{}`.",
                e
            ),
        }
    }

    #[test]
    fn cluster_from_yaml_label_field_rejected() {
        let string = format!("{}label: O*-f\n", HYDROGEN_PAIR);

        match serde_yaml::from_str::<Cluster>(&string) {
            Ok(_) => panic!("Deserialization should have failed but it succeeded."),
            Err(e) => assert!(e.to_string().contains("unknown field"), "Unexpected message `{}`.", e),
        }
    }
}
