/// HTTP transport for SolveBio API operations.
pub mod client;
/// Credential and API host discovery.
pub mod config;
/// Error types shared across the SDK.
pub mod error;
/// The resource object model: typed objects, collections, and addressing.
pub mod resource;

pub use client::http::{Method, Params, SolveClient, Transport};
pub use config::Config;
pub use error::SolveError;
pub use resource::api::{
    refresh, Creatable, Listable, Resource, Retrievable, Searchable, SingletonResource,
};
pub use resource::convert::{construct, convert};
pub use resource::kind::ResourceKind;
pub use resource::list::{Links, ListObject};
pub use resource::object::{SolveObject, Value};
pub use resource::types::{Dataset, DatasetField, Depository, DepositoryVersion, User};
pub use resource::urn::ResourceId;
