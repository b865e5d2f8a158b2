//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the statutory
//! deduction tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    ContributionTable, DeductionAllowances, TableMetadata, TaxTables, WithholdingTable,
};

/// Loads and provides access to the statutory deduction tables.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates the table shapes before handing them to the calculation
/// functions.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/brasil-2025/
/// ├── tabelas.yaml      # Table set metadata
/// ├── contribuicao.yaml # Tiered social security contribution brackets
/// ├── retencao.yaml     # Progressive income tax withholding brackets
/// └── deducoes.yaml     # Per-dependent deduction and housing-fund rate
/// ```
///
/// # Example
///
/// ```no_run
/// use holerite_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/brasil-2025").unwrap();
/// let tables = loader.tables();
/// println!("Competence: {}", tables.metadata().competence);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tables: TaxTables,
}

impl ConfigLoader {
    /// Loads the tables from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/brasil-2025")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A table is empty, its ceilings are not strictly ascending, or the
    ///   withholding table lacks an open top bracket
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<TableMetadata>(&path.join("tabelas.yaml"))?;
        let contribution = Self::load_yaml::<ContributionTable>(&path.join("contribuicao.yaml"))?;
        let withholding = Self::load_yaml::<WithholdingTable>(&path.join("retencao.yaml"))?;
        let allowances = Self::load_yaml::<DeductionAllowances>(&path.join("deducoes.yaml"))?;

        let tables = TaxTables::new(metadata, contribution, withholding, allowances);
        Self::validate(&tables)?;

        Ok(Self { tables })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Validates the table shapes the calculation functions rely on.
    fn validate(tables: &TaxTables) -> EngineResult<()> {
        let contribution = tables.contribution_brackets();
        if contribution.is_empty() {
            return Err(EngineError::InvalidTable {
                table: "contribuicao".to_string(),
                message: "at least one bracket is required".to_string(),
            });
        }
        if contribution.windows(2).any(|w| w[0].ceiling >= w[1].ceiling) {
            return Err(EngineError::InvalidTable {
                table: "contribuicao".to_string(),
                message: "bracket ceilings must be strictly ascending".to_string(),
            });
        }

        let withholding = tables.withholding_brackets();
        if withholding.is_empty() {
            return Err(EngineError::InvalidTable {
                table: "retencao".to_string(),
                message: "at least one bracket is required".to_string(),
            });
        }
        match withholding.last() {
            Some(last) if last.ceiling.is_none() => {}
            _ => {
                return Err(EngineError::InvalidTable {
                    table: "retencao".to_string(),
                    message: "the top bracket must be open (no ceiling)".to_string(),
                });
            }
        }
        let bounded: Vec<_> = withholding.iter().filter_map(|b| b.ceiling).collect();
        if bounded.windows(2).any(|w| w[0] >= w[1]) {
            return Err(EngineError::InvalidTable {
                table: "retencao".to_string(),
                message: "bracket ceilings must be strictly ascending".to_string(),
            });
        }
        if withholding.iter().filter(|b| b.ceiling.is_none()).count() > 1 {
            return Err(EngineError::InvalidTable {
                table: "retencao".to_string(),
                message: "only one open bracket is allowed".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the loaded table set.
    pub fn tables(&self) -> &TaxTables {
        &self.tables
    }
}
