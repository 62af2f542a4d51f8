pub mod builtin;
pub mod descriptor;

pub use descriptor::*;

use crate::error::CatalogError;
use ahash::AHashMap;
use itertools::Itertools;

/// Reserved pseudo-type for workflow entry points. Never a descriptor id:
/// triggers have no configuration, produce no resources, and follow the
/// special-cased rules in `validate_connection`.
pub const TRIGGER_SERVICE: &str = "trigger";

/// Immutable, keyed store of service descriptors: the single authority for
/// connection rules and default configurations.
///
/// Arena-style: descriptors live in a `Vec` in declaration order (which also
/// fixes the order of `valid_targets` for triggers), with a hash index for
/// id lookup. Construction validates the whole set; after that the catalog
/// is read-only and freely shareable.
#[derive(Debug, Clone, Default)]
pub struct ServiceCatalog {
    services: Vec<ServiceDescriptor>,
    index: AHashMap<String, usize>,
}

impl ServiceCatalog {
    /// Builds a catalog from a descriptor list, validating:
    ///
    /// - ids are unique and none claims the reserved `trigger` id;
    /// - every id referenced by a connection rule names a descriptor in the
    ///   set or is `trigger` (the set is closed under its own rules).
    pub fn new(services: Vec<ServiceDescriptor>) -> Result<Self, CatalogError> {
        let mut index = AHashMap::with_capacity(services.len());
        for (position, service) in services.iter().enumerate() {
            if service.id == TRIGGER_SERVICE {
                return Err(CatalogError::ReservedIdentifier(service.id.clone()));
            }
            if index.insert(service.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateService(service.id.clone()));
            }
        }

        for service in &services {
            let referenced = service
                .connection_rules
                .can_connect_to
                .iter()
                .chain(&service.connection_rules.can_receive_from)
                .unique();
            for id in referenced {
                if id != TRIGGER_SERVICE && !index.contains_key(id) {
                    return Err(CatalogError::UnknownRuleReference {
                        service_id: service.id.clone(),
                        referenced_id: id.clone(),
                    });
                }
            }
        }

        Ok(Self { services, index })
    }

    /// Looks up a descriptor by service id. `None` for unknown ids and for
    /// the `trigger` pseudo-type.
    pub fn get(&self, service_id: &str) -> Option<&ServiceDescriptor> {
        self.index
            .get(service_id)
            .map(|&position| &self.services[position])
    }

    pub fn contains(&self, service_id: &str) -> bool {
        self.index.contains_key(service_id)
    }

    /// All descriptors, in declaration order.
    pub fn services(&self) -> &[ServiceDescriptor] {
        &self.services
    }

    /// All service ids, in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|service| service.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
