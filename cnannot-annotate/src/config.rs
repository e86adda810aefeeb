use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cnannot_core::consts::{
    DEFAULT_AUTOSOMAL_PLOIDY, DEFAULT_CHROM_PREFIX_LEN, DEFAULT_HAPLOID_PLOIDY, X_CHROMOSOME,
    Y_CHROMOSOME,
};
use cnannot_io::SegmentColumns;
use cnannot_overlaprs::{InvalidOverlapperType, OverlapperType};

use crate::consts::DEFAULT_SAMPLE;
use crate::ploidy::SexChromosomePloidy;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing or invalid file extension in config file {0:?}. It must be `toml`, `yaml` or `yml`")]
    InvalidFileType(PathBuf),
    #[error(transparent)]
    InvalidBackend(#[from] InvalidOverlapperType),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Normal copy-number settings, see [`SexChromosomePloidy`].
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PloidyConfig {
    pub autosomal: u32,
    pub haploid: u32,
    pub sex_chromosomes: Vec<String>,
    pub overrides: HashMap<String, u32>,
}

impl Default for PloidyConfig {
    fn default() -> Self {
        PloidyConfig {
            autosomal: DEFAULT_AUTOSOMAL_PLOIDY,
            haploid: DEFAULT_HAPLOID_PLOIDY,
            sex_chromosomes: vec![X_CHROMOSOME.to_string(), Y_CHROMOSOME.to_string()],
            overrides: HashMap::new(),
        }
    }
}

impl PloidyConfig {
    pub fn to_policy(&self) -> SexChromosomePloidy {
        SexChromosomePloidy::new(
            self.autosomal,
            self.haploid,
            self.sex_chromosomes.iter().cloned().collect(),
            self.overrides.clone(),
        )
    }
}

///
/// Settings of an annotation run. Every field is optional in the file and
/// defaults to the behaviour of the Sequenza to PyClone conversion: sample
/// `TUMOR`, a three character chromosome prefix (`chr`), Sequenza column names.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnnotateConfig {
    /// VCF genotype column the allele depths are read from
    pub sample: String,
    /// Leading characters stripped from every chromosome name
    pub chrom_prefix_len: usize,
    /// Segment index backend, `bits` or `linear`
    pub backend: String,
    pub ploidy: PloidyConfig,
    pub columns: SegmentColumns,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        AnnotateConfig {
            sample: DEFAULT_SAMPLE.to_string(),
            chrom_prefix_len: DEFAULT_CHROM_PREFIX_LEN,
            backend: OverlapperType::default().to_string(),
            ploidy: PloidyConfig::default(),
            columns: SegmentColumns::default(),
        }
    }
}

impl AnnotateConfig {
    pub fn overlapper_type(&self) -> ConfigResult<OverlapperType> {
        Ok(self.backend.parse::<OverlapperType>()?)
    }

    pub fn policy(&self) -> SexChromosomePloidy {
        self.ploidy.to_policy()
    }
}

impl TryFrom<&Path> for AnnotateConfig {
    type Error = ConfigError;

    ///
    /// Load a config file, TOML or YAML depending on the extension.
    ///
    fn try_from(path: &Path) -> ConfigResult<Self> {
        let contents = read_to_string(path)?;
        let config: AnnotateConfig = match path.extension().and_then(OsStr::to_str) {
            Some("toml") => toml::from_str(&contents)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)?,
            _ => return Err(ConfigError::InvalidFileType(path.to_path_buf())),
        };

        // unknown backends are rejected at load time
        config.overlapper_type()?;

        Ok(config)
    }
}
