// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Billing configuration

use serde::{Deserialize, Serialize};

/// Fee charged per billing founder when nothing else is configured
pub const DEFAULT_BASE_FEE: i64 = 100_000;

/// Number of equal monthly installments the fee is split into
pub const DEFAULT_EMI_INSTALLMENTS: u32 = 6;

/// The `[billing]` section
///
/// The base fee is cohort-wide pricing. Operators override it per deployment
/// (or per cohort config file) instead of it being baked into the code.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BillingSection {
    /// Fee per billing founder, in whole currency units
    pub base_fee: Option<i64>,
    /// Installment count used for the EMI figures
    pub emi_installments: Option<u32>,
}

impl BillingSection {
    pub fn base_fee(&self) -> i64 {
        self.base_fee.unwrap_or(DEFAULT_BASE_FEE)
    }

    pub fn emi_installments(&self) -> u32 {
        self.emi_installments.unwrap_or(DEFAULT_EMI_INSTALLMENTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_unset() {
        let section = BillingSection::default();
        assert_eq!(section.base_fee(), 100_000);
        assert_eq!(section.emi_installments(), 6);
    }

    #[test]
    fn test_kebab_case_keys() {
        let section: BillingSection = toml::from_str(
            r#"
            base-fee = 150000
            emi-installments = 12
            "#,
        )
        .unwrap();
        assert_eq!(section.base_fee(), 150_000);
        assert_eq!(section.emi_installments(), 12);
    }

    #[test]
    fn test_snake_case_typo_is_rejected() {
        let parsed = toml::from_str::<BillingSection>("base_fee = 5\n");
        assert!(parsed.is_err());
    }
}
