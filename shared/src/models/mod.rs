//! Domain models
//!
//! Entities exchanged with the takedown backend.

pub mod profile;
pub mod search;
pub mod takedown;

pub use profile::{CreatorProfile, DmcaInfo, ProfileCreate, ProfileStatus, ProfileUpdate};
pub use search::{SearchBody, SearchHit};
pub use takedown::{
    EmailDispatch, EmailPreview, GoogleFormFields, GoogleFormPreview, TakedownAction,
    TakedownActionKind, TakedownCreate, TakedownOutcome, TakedownRequest, TakedownStatus,
};
