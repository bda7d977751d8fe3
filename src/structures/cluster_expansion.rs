// Released under MIT License.
// Copyright (c) 2024-2025 Ladislav Bartos

//! Implementation of the ClusterExpansion structure and its methods.

use log::warn;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::auxiliary::warning_prefix;
use crate::errors::WriteEnergeticsError;
use crate::structures::cluster::Cluster;
use crate::structures::species_list::SpeciesList;

/// Ordered collection of clusters forming the lattice Hamiltonian.
/// Displayed as the Zacros energetics block.
#[derive(Debug, Clone, Default)]
pub struct ClusterExpansion {
    clusters: Vec<Cluster>,
}

impl ClusterExpansion {
    /// Create a new empty `ClusterExpansion`.
    pub fn new() -> Self {
        ClusterExpansion::default()
    }

    /// Add a cluster to the end of the expansion.
    ///
    /// ## Notes
    /// - Clusters are identified by their labels. If a cluster with the same label
    ///   is already present, the cluster is still added but a warning is logged.
    pub fn push(&mut self, cluster: Cluster) {
        if self.get_by_label(cluster.label()).is_some() {
            warn!(
                "{} cluster `{}` is already present in the cluster expansion.",
                warning_prefix(),
                cluster.label()
            );
        }

        self.clusters.push(cluster);
    }

    /// Get the number of clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Check whether the expansion contains no clusters.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Iterate over the clusters of the expansion.
    pub fn iter(&self) -> std::slice::Iter<'_, Cluster> {
        self.clusters.iter()
    }

    /// Get the first cluster with the provided label.
    pub fn get_by_label(&self, label: &str) -> Option<&Cluster> {
        self.clusters.iter().find(|c| c.label() == label)
    }

    /// Collect all species participating in the clusters of the expansion.
    ///
    /// ## Notes
    /// - Each symbol is included only once, in order of first appearance.
    ///   Lattice species of a cluster precede its gas species.
    /// - Empty sites are not included.
    pub fn species(&self) -> SpeciesList {
        let mut species = SpeciesList::new();

        for cluster in self.clusters.iter() {
            for s in cluster.species().iter().chain(cluster.gas_species().iter()) {
                if !s.is_free_site() && !species.contains_symbol(s.symbol()) {
                    species.push(s.clone());
                }
            }
        }

        species
    }

    /// Write the energetics block into a file with the given name.
    ///
    /// ## Returns
    /// `Ok` if the file has been successfully written. `WriteEnergeticsError` otherwise.
    ///
    /// ## Example
    /// ```no_run
    /// # use zacros_rs::prelude::*;
    /// let o = Species::new("O*").unwrap().with_denticity(1);
    /// let cluster = Cluster::new(&["f"], &[], vec![o])
    ///     .unwrap()
    ///     .with_multiplicity(1)
    ///     .with_cluster_energy(-1.8);
    ///
    /// let expansion: ClusterExpansion = vec![cluster].into_iter().collect();
    /// if let Err(e) = expansion.write_energetics("energetics_input.dat") {
    ///     eprintln!("{}", e);
    ///     return;
    /// }
    /// ```
    ///
    /// ## Notes
    /// - Unlike the `Display` output, the file is terminated by a newline.
    pub fn write_energetics(&self, filename: impl AsRef<Path>) -> Result<(), WriteEnergeticsError> {
        let output = File::create(&filename)
            .map_err(|_| WriteEnergeticsError::CouldNotCreate(Box::from(filename.as_ref())))?;

        let mut writer = BufWriter::new(output);

        writeln!(writer, "{}", self).map_err(|_| WriteEnergeticsError::CouldNotWrite)?;
        writer
            .flush()
            .map_err(|_| WriteEnergeticsError::CouldNotWrite)?;

        Ok(())
    }
}

impl fmt::Display for ClusterExpansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "energetics\n\n")?;
        for cluster in self.clusters.iter() {
            write!(f, "{}\n\n", cluster)?;
        }
        write!(f, "end_energetics")
    }
}

impl From<Vec<Cluster>> for ClusterExpansion {
    fn from(clusters: Vec<Cluster>) -> Self {
        clusters.into_iter().collect()
    }
}

impl FromIterator<Cluster> for ClusterExpansion {
    fn from_iter<I: IntoIterator<Item = Cluster>>(iter: I) -> Self {
        let mut expansion = ClusterExpansion::new();
        for cluster in iter {
            expansion.push(cluster);
        }

        expansion
    }
}

impl<'a> IntoIterator for &'a ClusterExpansion {
    type Item = &'a Cluster;
    type IntoIter = std::slice::Iter<'a, Cluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utilities::utilities::{
        adsorbed, gas, hydrogen_pair_cluster, oxygen_point_cluster,
    };
    use file_diff::diff_files;
    use float_cmp::assert_approx_eq;
    use tempfile::NamedTempFile;

    fn expansion() -> ClusterExpansion {
        let mut expansion = ClusterExpansion::new();
        expansion.push(oxygen_point_cluster(-1.8));
        expansion.push(hydrogen_pair_cluster());
        expansion
    }

    #[test]
    fn display_empty() {
        let expansion = ClusterExpansion::new();
        assert!(expansion.is_empty());
        assert_eq!(expansion.to_string(), "energetics\n\nend_energetics");
    }

    #[test]
    fn display_expansion() {
        let expansion = expansion();

        let expected = concat!(
            "energetics\n\n",
            "cluster O*-f\n",
            "  sites 1\n",
            "  neighboring \n",
            "  lattice_state\n",
            "    1 O* 1\n",
            "  site_types f\n",
            "  graph_multiplicity 1\n",
            "  cluster_eng -1.8\n",
            "end_cluster\n\n",
            "cluster H*-f,H*-f:1-2\n",
            "  sites 2\n",
            "  neighboring 1-2\n",
            "  lattice_state\n",
            "    1 H* 1\n",
            "    2 H* 1\n",
            "  site_types f f\n",
            "  graph_multiplicity 2\n",
            "  cluster_eng 0.1\n",
            "end_cluster\n\n",
            "end_energetics"
        );

        assert_eq!(expansion.to_string(), expected);
    }

    #[test]
    fn write_energetics() {
        let expansion = expansion();

        let output = NamedTempFile::new().unwrap();
        let path_to_output = output.path();

        expansion.write_energetics(path_to_output).unwrap();

        let mut result = File::open(path_to_output).unwrap();
        let mut expected = File::open("test_files/energetics.dat").unwrap();

        assert!(diff_files(&mut result, &mut expected));
    }

    #[test]
    fn write_energetics_fails() {
        let expansion = expansion();

        match expansion.write_energetics("test_files/nonexistent/energetics.dat") {
            Err(WriteEnergeticsError::CouldNotCreate(path)) => {
                assert_eq!(path.to_str().unwrap(), "test_files/nonexistent/energetics.dat")
            }
            Ok(_) => panic!("Function should have failed but it succeeded."),
            Err(e) => panic!(
                "Function failed successfully but incorrect error type `{}` was returned.",
                e
            ),
        }
    }

    #[test]
    fn duplicate_labels_are_kept() {
        let mut expansion = ClusterExpansion::new();
        expansion.push(oxygen_point_cluster(-1.8));
        expansion.push(oxygen_point_cluster(-0.5));

        assert_eq!(expansion.len(), 2);

        // the first cluster with the label is returned
        let cluster = expansion.get_by_label("O*-f").unwrap();
        assert_approx_eq!(f64, cluster.cluster_energy(), -1.8);
    }

    #[test]
    fn get_by_label() {
        let expansion = expansion();

        assert_eq!(
            expansion.get_by_label("H*-f,H*-f:1-2").unwrap().multiplicity(),
            2
        );
        assert!(expansion.get_by_label("H*-f").is_none());
    }

    #[test]
    fn collect_species() {
        let mut expansion = expansion();
        expansion.push(
            Cluster::new(
                &["f", "f"],
                &[(1, 2)],
                vec![adsorbed("O*", 1), adsorbed("*", 0)],
            )
            .unwrap()
            .with_gas_species(vec![gas("O2", 0.0), gas("H2", 0.0)]),
        );

        let species = expansion.species();
        let symbols: Vec<&str> = species.iter().map(|s| s.symbol()).collect();
        assert_eq!(symbols, vec!["O*", "H*", "O2", "H2"]);
    }

    #[test]
    fn collect_from_iterator() {
        let expansion: ClusterExpansion =
            vec![hydrogen_pair_cluster(), oxygen_point_cluster(0.0)].into();

        let labels: Vec<&str> = (&expansion).into_iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["H*-f,H*-f:1-2", "O*-f"]);
    }
}
