mod location_refinement;
mod retention_policy;

pub use location_refinement::{LocationRefinementPolicy, LocationRule, SuffixMapping};
pub use retention_policy::{RetentionAction, RetentionPolicy};
