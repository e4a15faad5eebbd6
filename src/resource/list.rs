use serde::Deserialize;
use serde_json::Value as Json;

use crate::client::http::{Method, Params, Transport};
use crate::error::SolveError;
use crate::resource::convert::convert;
use crate::resource::object::{SolveObject, Value};

/// Forward and backward page links, as the server returns them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// One page of list results plus the state needed to walk the rest.
///
/// Elements are held raw and converted as they are yielded. The cursor is
/// meaningful only within the loaded page: walking past the end replaces
/// the entire backing state with the next page — nothing is appended, and
/// previously yielded elements are gone once the page advances.
#[derive(Debug, Clone, Deserialize)]
pub struct ListObject {
    url: String,
    #[serde(default)]
    links: Links,
    #[serde(default)]
    data: Vec<Json>,
    #[serde(skip)]
    cursor: usize,
}

impl ListObject {
    /// Parse a page from the list wire shape (`data`, `links`, `url`).
    pub(crate) fn from_response(resp: Json) -> Result<ListObject, SolveError> {
        serde_json::from_value(resp)
            .map_err(|e| SolveError::UnexpectedResponse(format!("not a list response: {e}")))
    }

    /// Collection URL this page was served from.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn links(&self) -> &Links {
        &self.links
    }

    /// Number of elements on the currently loaded page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Re-issue the initial list request for this collection, returning a
    /// fresh collection positioned at the start.
    pub fn all(&self, transport: &dyn Transport, params: &Params) -> Result<ListObject, SolveError> {
        let resp = transport.request(Method::Get, &self.url, params)?;
        ListObject::from_response(resp)
    }

    /// Create a new resource against this collection's URL.
    pub fn create(
        &self,
        transport: &dyn Transport,
        params: &Params,
    ) -> Result<SolveObject, SolveError> {
        let resp = transport.request(Method::Post, &self.url, params)?;
        match convert(resp) {
            Value::Object(object) => Ok(object),
            other => Err(SolveError::UnexpectedResponse(format!(
                "expected a created object, got: {other:?}"
            ))),
        }
    }

    /// Fetch the next page, if there is one.
    pub fn next_page(
        &self,
        transport: &dyn Transport,
        params: &Params,
    ) -> Result<Option<ListObject>, SolveError> {
        let Some(next) = self.links.next.as_deref() else {
            return Ok(None);
        };
        let resp = transport.request(Method::Get, next, params)?;
        ListObject::from_response(resp).map(Some)
    }

    /// Fetch the previous page and discard it.
    ///
    /// Mirrors the upstream client: the request is issued but the result is
    /// not applied to local state. Kept as-is until the intended semantics
    /// are settled.
    pub fn prev_page(&self, transport: &dyn Transport, params: &Params) -> Result<(), SolveError> {
        if let Some(prev) = self.links.prev.as_deref() {
            transport.request(Method::Get, prev, params)?;
        }
        Ok(())
    }

    /// Snapshot of the currently loaded page as converted values.
    ///
    /// Never paginates; elements beyond this page are not included.
    pub fn objects(&self) -> Vec<Value> {
        self.data.iter().cloned().map(convert).collect()
    }

    /// Yield the next element, fetching the following page when the current
    /// one is exhausted.
    ///
    /// Pulling can block on network I/O and can fail independently of how
    /// this collection was built. `Ok(None)` means the final page is
    /// consumed; the walk does not restart — call `all` for a fresh one.
    pub fn produce(&mut self, transport: &dyn Transport) -> Result<Option<SolveObject>, SolveError> {
        loop {
            if self.cursor < self.data.len() {
                let raw = self.data[self.cursor].clone();
                self.cursor += 1;
                return match convert(raw) {
                    Value::Object(object) => Ok(Some(object)),
                    other => Err(SolveError::UnexpectedResponse(format!(
                        "list element is not an object: {other:?}"
                    ))),
                };
            }

            match self.next_page(transport, &Params::new())? {
                // full replacement: cursor back to the start of the new page
                Some(page) => *self = page,
                None => return Ok(None),
            }
        }
    }

    /// Walk every element of the result set, fetching pages on demand.
    pub fn iter<'a>(&'a mut self, transport: &'a dyn Transport) -> Iter<'a> {
        Iter {
            list: self,
            transport,
        }
    }
}

/// Iterator over a collection that pulls pages as needed; see
/// [`ListObject::produce`] for the blocking and failure behavior.
pub struct Iter<'a> {
    list: &'a mut ListObject,
    transport: &'a dyn Transport,
}

impl Iterator for Iter<'_> {
    type Item = Result<SolveObject, SolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.produce(self.transport).transpose()
    }
}
