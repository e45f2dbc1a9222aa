//! Shared domain for the trades job board: the static catalog, listing
//! search, the showcase carousel and the signup dialogs.

pub mod catalog;
pub mod filter;
pub mod model;
pub mod salary;
pub mod showcase;
pub mod signup;

pub use catalog::{Catalog, CatalogError};
pub use filter::{JobFilter, ListingPage};
pub use model::{BadgeVariant, Category, JobListing, JobType, Tradesperson};
pub use signup::{FlowAction, FlowError, FlowKind, Network, NetworkLinks, SignupFlow, Stage};
