//! Normal (germline) copy number per chromosome.
//!
//! This is the only place where the sample's sex is inferred. The inference is
//! a heuristic: a sample is treated as carrying a Y chromosome when its
//! copy-number segment table has at least one segment on `Y`. It is a proxy
//! derived from copy-number calls, not a genotype call.

use std::collections::{HashMap, HashSet};

use cnannot_core::consts::{
    DEFAULT_AUTOSOMAL_PLOIDY, DEFAULT_HAPLOID_PLOIDY, X_CHROMOSOME, Y_CHROMOSOME,
};

/// Decides the normal copy number of a chromosome.
pub trait PloidyPolicy: Send + Sync {
    ///
    /// Normal copy number for a locus on `chromosome`.
    ///
    /// # Arguments
    /// - chromosome: normalized chromosome name
    /// - sample_has_y: whether the segment table shows a Y chromosome
    ///
    fn normal_copy_number(&self, chromosome: &str, sample_has_y: bool) -> u32;
}

///
/// Diploid everywhere, haploid on the sex chromosomes of samples that carry a Y.
///
/// Explicit per-chromosome overrides take precedence over both rules.
///
#[derive(Debug, Clone, PartialEq)]
pub struct SexChromosomePloidy {
    pub autosomal: u32,
    pub haploid: u32,
    pub sex_chromosomes: HashSet<String>,
    pub overrides: HashMap<String, u32>,
}

impl Default for SexChromosomePloidy {
    fn default() -> Self {
        SexChromosomePloidy {
            autosomal: DEFAULT_AUTOSOMAL_PLOIDY,
            haploid: DEFAULT_HAPLOID_PLOIDY,
            sex_chromosomes: [X_CHROMOSOME, Y_CHROMOSOME]
                .into_iter()
                .map(String::from)
                .collect(),
            overrides: HashMap::new(),
        }
    }
}

impl SexChromosomePloidy {
    pub fn new(
        autosomal: u32,
        haploid: u32,
        sex_chromosomes: HashSet<String>,
        overrides: HashMap<String, u32>,
    ) -> Self {
        SexChromosomePloidy {
            autosomal,
            haploid,
            sex_chromosomes,
            overrides,
        }
    }

    pub fn with_override(mut self, chromosome: &str, ploidy: u32) -> Self {
        self.overrides.insert(chromosome.to_string(), ploidy);
        self
    }
}

impl PloidyPolicy for SexChromosomePloidy {
    fn normal_copy_number(&self, chromosome: &str, sample_has_y: bool) -> u32 {
        if let Some(ploidy) = self.overrides.get(chromosome) {
            return *ploidy;
        }
        if sample_has_y && self.sex_chromosomes.contains(chromosome) {
            self.haploid
        } else {
            self.autosomal
        }
    }
}
