// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! On-disk ledger layout
//!
//! ```toml
//! [[coupon]]
//! code = "HALF"
//! discount-percentage = 50
//! instructions = "Quote HALF on every transfer"
//!
//! [[startup]]
//! id = "northwind"
//! billing-founders-count = 2
//! applied-coupon = "HALF"
//!
//! [[startup.payment]]
//! amount = 25000
//! status = "paid"
//! ```

use std::collections::{BTreeMap, HashMap};

use bo_domain_types::{Coupon, Payment, Startup};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LedgerFile {
    #[serde(default)]
    pub coupon: Vec<Coupon>,
    #[serde(default)]
    pub startup: Vec<StartupRecord>,
}

/// A startup as written in the ledger, coupon referenced by code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct StartupRecord {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[validate(range(min = 1))]
    pub billing_founders_count: u32,
    #[serde(default)]
    pub applied_coupon: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub payment: Vec<Payment>,
}

impl LedgerFile {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate every record and resolve coupon references
    pub fn into_startups(self) -> Result<BTreeMap<String, Startup>> {
        let mut catalog: HashMap<String, Coupon> = HashMap::with_capacity(self.coupon.len());
        for coupon in self.coupon {
            coupon.validate().map_err(|source| Error::Validation {
                record: format!("coupon {}", coupon.code),
                source,
            })?;
            if catalog.contains_key(&coupon.code) {
                return Err(Error::DuplicateCoupon(coupon.code));
            }
            catalog.insert(coupon.code.clone(), coupon);
        }

        let mut startups = BTreeMap::new();
        for record in self.startup {
            record.validate().map_err(|source| Error::Validation {
                record: format!("startup {}", record.id),
                source,
            })?;

            let applied_coupon = match &record.applied_coupon {
                Some(code) => Some(catalog.get(code).cloned().ok_or_else(|| Error::UnknownCoupon {
                    startup: record.id.clone(),
                    code: code.clone(),
                })?),
                None => None,
            };

            if startups.contains_key(&record.id) {
                return Err(Error::DuplicateStartup(record.id));
            }
            let startup = Startup {
                id: record.id.clone(),
                name: record.name,
                billing_founders_count: record.billing_founders_count,
                payments: record.payment,
                applied_coupon,
            };
            startups.insert(record.id, startup);
        }

        Ok(startups)
    }
}
