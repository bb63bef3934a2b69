// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// ECDF-based objective functions: shared utilities, the Gaussian model of
// ECDF vectors, bin selection and the three objective variants.

pub mod bins;
pub mod bootstrap;
pub mod model;
pub mod multiple;
pub mod standard;
pub mod utils;

pub use bins::{BinChoice, ChooseBinsOptions};
pub use bootstrap::{BootstrapObjective, DEFAULT_BOOTSTRAP_SAMPLES, ReferenceSet};
pub use model::EcdfModel;
pub use multiple::MultipleObjectives;
pub use standard::StandardObjective;
