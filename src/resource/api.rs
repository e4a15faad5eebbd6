use serde_json::Value as Json;

use crate::client::http::{Method, Params, Transport};
use crate::error::SolveError;
use crate::resource::convert::convert;
use crate::resource::kind::ResourceKind;
use crate::resource::list::ListObject;
use crate::resource::object::{SolveObject, Value};
use crate::resource::urn::{self, ResourceId};

/// A concrete API resource type with a fixed kind.
pub trait Resource {
    const KIND: ResourceKind;
}

/// Lookup of a single resource by numeric ID or URN.
pub trait Retrievable: Resource {
    /// Fetch one resource and return it fully hydrated.
    ///
    /// Textual identifiers are validated as URNs of this type before any
    /// request is made — a mismatch is a hard error, never a fallback to a
    /// numeric lookup. Integral identifiers look up by ID.
    fn retrieve(
        transport: &dyn Transport,
        id: impl Into<ResourceId>,
    ) -> Result<SolveObject, SolveError> {
        let id = match id.into() {
            ResourceId::Urn(raw) => ResourceId::Urn(urn::validate(Self::KIND, &raw)?),
            id => id,
        };
        let mut object = SolveObject::from_id(Self::KIND, id);
        refresh(transport, &mut object)?;
        Ok(object)
    }
}

/// Enumeration of a resource type's collection.
pub trait Listable: Resource {
    fn all(transport: &dyn Transport, params: &Params) -> Result<ListObject, SolveError> {
        let url = Self::KIND.collection_url()?;
        let resp = transport.request(Method::Get, &url, params)?;
        ListObject::from_response(resp)
    }
}

/// Full-text search over a resource type's collection.
pub trait Searchable: Resource {
    /// `query` is sent as the `q` parameter; a caller-supplied `q` in
    /// `params` is overwritten.
    fn search(
        transport: &dyn Transport,
        query: &str,
        params: &Params,
    ) -> Result<ListObject, SolveError> {
        let mut params = params.clone();
        params.insert("q".to_string(), Json::String(query.to_string()));
        let url = Self::KIND.collection_url()?;
        let resp = transport.request(Method::Get, &url, &params)?;
        ListObject::from_response(resp)
    }
}

/// Creation of new resources in a collection.
pub trait Creatable: Resource {
    fn create(transport: &dyn Transport, params: &Params) -> Result<SolveObject, SolveError> {
        let url = Self::KIND.collection_url()?;
        let resp = transport.request(Method::Post, &url, params)?;
        into_object(convert(resp))
    }
}

/// A resource with exactly one server-side instance.
pub trait SingletonResource: Resource {
    fn retrieve(transport: &dyn Transport) -> Result<SolveObject, SolveError> {
        let url = Self::KIND.collection_url()?;
        let resp = transport.request(Method::Get, &url, &Params::new())?;
        into_object(convert(resp))
    }
}

/// Re-fetch an object from its own instance URL and rehydrate it.
///
/// Fails with an addressing error when the object carries neither a numeric
/// ID nor a URN; the object is untouched unless the response arrives.
pub fn refresh(transport: &dyn Transport, object: &mut SolveObject) -> Result<(), SolveError> {
    let url = object.instance_url()?;
    let resp = transport.request(Method::Get, &url, &Params::new())?;
    match resp {
        Json::Object(values) => {
            object.refresh_from(values);
            Ok(())
        }
        other => Err(SolveError::UnexpectedResponse(format!(
            "expected an object body, got: {other}"
        ))),
    }
}

fn into_object(value: Value) -> Result<SolveObject, SolveError> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(SolveError::UnexpectedResponse(format!(
            "expected an object body, got: {other:?}"
        ))),
    }
}
