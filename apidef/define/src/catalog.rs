//! An ordered collection of endpoint definitions.

use crate::endpoint::Endpoint;
use crate::error::DefineError;

/// Endpoints available to the generator, keyed by `(path, method)`.
///
/// Insertion order is kept so listing the catalog is deterministic.
///
/// ```
/// use apidef_define::{Catalog, Endpoint};
///
/// let mut catalog = Catalog::new();
/// catalog.insert(Endpoint::new("/signup", "POST").unwrap()).unwrap();
///
/// assert!(catalog.find("/signup", "POST").is_some());
/// assert!(catalog.find("/signup", "GET").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    endpoints: Vec<Endpoint>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an endpoint.
    ///
    /// ## Errors
    ///
    /// Returns [`DefineError::DuplicateEndpoint`] if an endpoint with the same
    /// `(path, method)` is already present.
    pub fn insert(&mut self, endpoint: Endpoint) -> Result<(), DefineError> {
        if self.find(endpoint.path(), endpoint.method()).is_some() {
            return Err(DefineError::DuplicateEndpoint {
                path: endpoint.path().to_string(),
                method: endpoint.method().to_string(),
            });
        }
        self.endpoints.push(endpoint);
        Ok(())
    }

    pub fn find(&self, path: &str, method: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|ep| ep.matches(path, method))
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl TryFrom<Vec<Endpoint>> for Catalog {
    type Error = DefineError;

    fn try_from(endpoints: Vec<Endpoint>) -> Result<Self, Self::Error> {
        let mut catalog = Catalog::new();
        for endpoint in endpoints {
            catalog.insert(endpoint)?;
        }
        Ok(catalog)
    }
}
