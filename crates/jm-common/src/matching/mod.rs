pub mod education;
pub mod experience;
pub mod field;
pub mod location;
pub mod pipeline;
pub mod reasoning;
pub mod reconcile;
pub mod salary;
pub mod scoring;
pub mod skills;
pub mod weights;
