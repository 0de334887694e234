// Service layer: the facade the presentation crate talks to.
pub mod review_service;

pub use review_service::ReviewService;
