// Coordinators layer - Workflow orchestration
//
// Coordinators compose store operations and serializers for specific API
// endpoints. Validation of individual records lives in the stores.
pub mod item_coordinator;
pub mod person_coordinator;

pub use item_coordinator::ItemCoordinator;
pub use person_coordinator::PersonCoordinator;
