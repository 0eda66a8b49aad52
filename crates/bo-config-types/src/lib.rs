// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Distributed, strongly-typed configuration structs for back office modules.
//!
//! Each module owns the shape of its own section. `config-core` merges the
//! layers into one JSON document and the modules extract their typed view
//! from it.
//!
//! `UiRoot` keys sit at the top level of the document; `billing` and
//! `ledger` stay nested sections.

pub mod billing;
pub mod ledger;
pub mod ui;
