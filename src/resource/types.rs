use crate::client::http::{Method, Params, Transport};
use crate::error::SolveError;
use crate::resource::api::{
    Creatable, Listable, Resource, Retrievable, Searchable, SingletonResource,
};
use crate::resource::kind::ResourceKind;
use crate::resource::list::ListObject;
use crate::resource::object::{SolveObject, Value};
use crate::resource::urn::ResourceId;

/// A named container of dataset versions.
pub struct Depository;

impl Resource for Depository {
    const KIND: ResourceKind = ResourceKind::Depository;
}
impl Retrievable for Depository {}
impl Listable for Depository {}
impl Searchable for Depository {}
impl Creatable for Depository {}

/// One released version within a depository.
pub struct DepositoryVersion;

impl Resource for DepositoryVersion {
    const KIND: ResourceKind = ResourceKind::DepositoryVersion;
}
impl Retrievable for DepositoryVersion {}
impl Listable for DepositoryVersion {}
impl Creatable for DepositoryVersion {}

/// A dataset within a depository version.
pub struct Dataset;

impl Resource for Dataset {
    const KIND: ResourceKind = ResourceKind::Dataset;
}
impl Retrievable for Dataset {}
impl Listable for Dataset {}
impl Creatable for Dataset {}

/// A single field of a dataset.
pub struct DatasetField;

impl Resource for DatasetField {
    const KIND: ResourceKind = ResourceKind::DatasetField;
}
impl Retrievable for DatasetField {}
impl Listable for DatasetField {}
impl Creatable for DatasetField {}

/// The authenticated account; exactly one instance server-side.
pub struct User;

impl Resource for User {
    const KIND: ResourceKind = ResourceKind::User;
}
impl SingletonResource for User {}

// Hierarchy navigation. Each instance embeds URLs for its child
// collections (`versions_url`, `datasets_url`, ...) and ID-or-URN
// references to its ancestors; these helpers follow them.
impl SolveObject {
    /// Versions contained in this depository.
    pub fn versions(
        &self,
        transport: &dyn Transport,
        params: &Params,
    ) -> Result<ListObject, SolveError> {
        self.linked_collection(transport, "versions_url", params)
    }

    /// Datasets contained in this depository version.
    pub fn datasets(
        &self,
        transport: &dyn Transport,
        params: &Params,
    ) -> Result<ListObject, SolveError> {
        self.linked_collection(transport, "datasets_url", params)
    }

    /// Fields of this dataset.
    pub fn fields(
        &self,
        transport: &dyn Transport,
        params: &Params,
    ) -> Result<ListObject, SolveError> {
        self.linked_collection(transport, "fields_url", params)
    }

    /// Facets observed for this dataset field.
    pub fn facets(
        &self,
        transport: &dyn Transport,
        params: &Params,
    ) -> Result<ListObject, SolveError> {
        self.linked_collection(transport, "facets_url", params)
    }

    /// The depository this instance belongs to.
    pub fn depository(&self, transport: &dyn Transport) -> Result<SolveObject, SolveError> {
        Depository::retrieve(transport, self.reference("depository")?)
    }

    /// The depository version this instance belongs to.
    pub fn depository_version(&self, transport: &dyn Transport) -> Result<SolveObject, SolveError> {
        DepositoryVersion::retrieve(transport, self.reference("depository_version")?)
    }

    fn linked_collection(
        &self,
        transport: &dyn Transport,
        attr: &str,
        params: &Params,
    ) -> Result<ListObject, SolveError> {
        let url = self
            .get(attr)
            .and_then(Value::as_str)
            .ok_or_else(|| SolveError::UnexpectedResponse(format!("instance has no {attr} URL")))?;
        let resp = transport.request(Method::Get, url, params)?;
        ListObject::from_response(resp)
    }

    fn reference(&self, attr: &str) -> Result<ResourceId, SolveError> {
        match self.get(attr) {
            Some(Value::Int(id)) => Ok(ResourceId::Id(*id)),
            Some(Value::String(urn)) => Ok(ResourceId::Urn(urn.clone())),
            _ => Err(SolveError::UnexpectedResponse(format!(
                "instance has no {attr} reference"
            ))),
        }
    }
}
