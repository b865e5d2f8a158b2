//! Configuration types for the statutory deduction tables.
//!
//! This module contains the strongly-typed table structures that are
//! deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the loaded table set.
///
/// Identifies which competence year the tables apply to and where the
/// published values came from.
#[derive(Debug, Clone, Deserialize)]
pub struct TableMetadata {
    /// The human-readable name of the table set.
    pub name: String,
    /// The competence year the tables apply to (e.g., "2025").
    pub competence: String,
    /// The version or publication date of the tables.
    pub version: String,
    /// URL to the official publication.
    pub source_url: String,
}

/// One bracket of the tiered social security (INSS) contribution table.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionBracket {
    /// The bracket ceiling. During the tier walk this value also caps the
    /// salary slice taxed at this bracket's rate.
    pub ceiling: Decimal,
    /// The contribution rate for this bracket (e.g., "0.075").
    pub rate: Decimal,
}

/// Social security contribution table file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionTable {
    /// Legal reference for the published table.
    pub legal_ref: String,
    /// Ascending brackets.
    pub brackets: Vec<ContributionBracket>,
}

/// One bracket of the progressive income tax (IRRF) withholding table.
#[derive(Debug, Clone, Deserialize)]
pub struct WithholdingBracket {
    /// The bracket ceiling; `None` marks the open top bracket.
    #[serde(default)]
    pub ceiling: Option<Decimal>,
    /// The withholding rate for this bracket.
    pub rate: Decimal,
    /// The fixed amount subtracted after applying the rate.
    pub deduction: Decimal,
}

/// Income tax withholding table file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct WithholdingTable {
    /// Legal reference for the published table.
    pub legal_ref: String,
    /// Ascending brackets; the last must be open (no ceiling).
    pub brackets: Vec<WithholdingBracket>,
}

/// Fixed deduction allowances and flat rates.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionAllowances {
    /// The income tax deduction per declared dependent.
    pub per_dependent: Decimal,
    /// The flat housing-fund (FGTS) contribution rate.
    pub housing_fund_rate: Decimal,
    /// Legal reference for the housing-fund contribution.
    pub housing_fund_legal_ref: String,
}

/// The complete statutory table set loaded from YAML files.
///
/// This struct aggregates everything the calculation functions consult:
/// the tiered contribution table, the progressive withholding table and
/// the fixed allowances.
#[derive(Debug, Clone)]
pub struct TaxTables {
    /// Table set metadata.
    metadata: TableMetadata,
    /// Contribution brackets (sorted by ceiling, ascending).
    contribution: ContributionTable,
    /// Withholding brackets (sorted by ceiling ascending, open bracket last).
    withholding: WithholdingTable,
    /// Fixed allowances.
    allowances: DeductionAllowances,
}

impl TaxTables {
    /// Creates a new TaxTables from its component parts.
    pub fn new(
        metadata: TableMetadata,
        mut contribution: ContributionTable,
        mut withholding: WithholdingTable,
        allowances: DeductionAllowances,
    ) -> Self {
        contribution.brackets.sort_by(|a, b| a.ceiling.cmp(&b.ceiling));
        withholding.brackets.sort_by(|a, b| match (a.ceiling, b.ceiling) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        Self {
            metadata,
            contribution,
            withholding,
            allowances,
        }
    }

    /// Returns the table set metadata.
    pub fn metadata(&self) -> &TableMetadata {
        &self.metadata
    }

    /// Returns the contribution brackets, ascending.
    pub fn contribution_brackets(&self) -> &[ContributionBracket] {
        &self.contribution.brackets
    }

    /// Returns the legal reference of the contribution table.
    pub fn contribution_legal_ref(&self) -> &str {
        &self.contribution.legal_ref
    }

    /// Returns the withholding brackets, ascending, open bracket last.
    pub fn withholding_brackets(&self) -> &[WithholdingBracket] {
        &self.withholding.brackets
    }

    /// Returns the legal reference of the withholding table.
    pub fn withholding_legal_ref(&self) -> &str {
        &self.withholding.legal_ref
    }

    /// Returns the fixed deduction allowances.
    pub fn allowances(&self) -> &DeductionAllowances {
        &self.allowances
    }
}
