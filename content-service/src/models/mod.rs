pub mod agency;
pub mod beach;
pub mod business;
pub mod permission;
pub mod review;
pub mod role;
pub mod tag;
pub mod tour;

pub use agency::{Agency, CreateAgencyRequest, UpdateAgencyRequest};
pub use beach::{Beach, CreateBeachRequest, UpdateBeachRequest};
pub use business::{Business, BusinessCategory, CreateBusinessRequest, UpdateBusinessRequest};
pub use permission::Permission;
pub use review::{ReviewDecision, ReviewRequest, ReviewStatus};
pub use role::Role;
pub use tag::{CreateTagRequest, Tag, UpdateTagRequest};
pub use tour::{CreateTourRequest, Tour, UpdateTourRequest};
