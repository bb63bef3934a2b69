pub mod ecdf;

// Unified re-exports so users can import
// ecdf_estimator::estimators::approaches::* ergonomically.
pub use ecdf::{
    BinChoice, BootstrapObjective, ChooseBinsOptions, EcdfModel, MultipleObjectives,
    ReferenceSet, StandardObjective,
};
