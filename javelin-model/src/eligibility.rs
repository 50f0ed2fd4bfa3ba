//! Which entities produce output, and why the others do not.

use std::fmt;

use crate::{Entity, EntityKind, HttpMethod, Project};

/// Why an entity produces no controller method.
///
/// Skipping is never an error. The distinction between intentional and
/// malformed skips exists so tools can report the latter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// A data or enum entity.
    NotARequest,
    /// A request marked `abstract = true`.
    Abstract,
    /// Missing or unrecognized HTTP method (the raw value, if any).
    UnresolvedMethod(Option<String>),
    /// Missing response, or one that does not name a concrete data entity.
    UnresolvedResponse(Option<String>),
}

impl SkipReason {
    /// Whether the entity looks like a request that was meant to produce
    /// output but has incomplete metadata.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::UnresolvedMethod(_) | Self::UnresolvedResponse(_)
        )
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotARequest => f.write_str("not a request"),
            Self::Abstract => f.write_str("abstract request"),
            Self::UnresolvedMethod(None) => f.write_str("no HTTP method"),
            Self::UnresolvedMethod(Some(method)) => {
                write!(f, "unrecognized HTTP method '{}'", method)
            }
            Self::UnresolvedResponse(None) => f.write_str("no response type"),
            Self::UnresolvedResponse(Some(response)) => write!(
                f,
                "response '{}' does not name a concrete data entity",
                response
            ),
        }
    }
}

/// An entity found by name, together with the module that declares it.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedEntity<'a> {
    pub module: &'a str,
    pub name: &'a str,
    pub entity: &'a Entity,
}

/// A request entity that will produce a controller method.
#[derive(Debug, Clone, Copy)]
pub struct EligibleRequest<'a> {
    pub module: &'a str,
    pub name: &'a str,
    pub entity: &'a Entity,
    pub method: HttpMethod,
    pub path: Option<&'a str>,
    pub response: ResolvedEntity<'a>,
}

impl Project {
    /// Look up an entity by reference as seen from `from_module`.
    ///
    /// A bare name is looked up in `from_module` first and then across all
    /// modules, where it must be unique. `module.Entity` names the module
    /// explicitly.
    pub fn resolve_entity<'a>(
        &'a self,
        from_module: &str,
        reference: &str,
    ) -> Option<ResolvedEntity<'a>> {
        let local = self
            .modules
            .get_key_value(from_module)
            .and_then(|(module, m)| {
                m.entities
                    .get_key_value(reference)
                    .map(|(name, entity)| ResolvedEntity {
                        module,
                        name,
                        entity,
                    })
            });
        if local.is_some() {
            return local;
        }

        if let Some((module_name, entity_name)) = reference.split_once('.') {
            let (module, m) = self.modules.get_key_value(module_name)?;
            let (name, entity) = m.entities.get_key_value(entity_name)?;
            return Some(ResolvedEntity {
                module,
                name,
                entity,
            });
        }

        let mut matches = self.modules.iter().filter_map(|(module, m)| {
            m.entities
                .get_key_value(reference)
                .map(|(name, entity)| ResolvedEntity {
                    module,
                    name,
                    entity,
                })
        });
        let first = matches.next()?;
        match matches.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    /// Decide whether `entity`, declared as `name` in `module`, produces a
    /// controller method.
    pub fn classify<'a>(
        &'a self,
        module: &'a str,
        name: &'a str,
        entity: &'a Entity,
    ) -> Result<EligibleRequest<'a>, SkipReason> {
        if entity.kind != EntityKind::Request {
            return Err(SkipReason::NotARequest);
        }
        if entity.is_abstract {
            return Err(SkipReason::Abstract);
        }

        let method = entity
            .http_method()
            .ok_or_else(|| SkipReason::UnresolvedMethod(entity.method.clone()))?;

        let response = entity
            .response
            .as_deref()
            .and_then(|reference| self.resolve_entity(module, reference))
            .filter(|resolved| {
                resolved.entity.kind == EntityKind::Data && !resolved.entity.is_abstract
            })
            .ok_or_else(|| SkipReason::UnresolvedResponse(entity.response.clone()))?;

        Ok(EligibleRequest {
            module,
            name,
            entity,
            method,
            path: entity.path.as_deref(),
            response,
        })
    }

    /// Eligible requests of a module, in declaration order.
    pub fn eligible_requests(&self, module: &str) -> Vec<EligibleRequest<'_>> {
        let Some((module, m)) = self.modules.get_key_value(module) else {
            return Vec::new();
        };
        m.entities
            .iter()
            .filter_map(|(name, entity)| self.classify(module, name, entity).ok())
            .collect()
    }

    /// Entities of a module that produce no controller method, with reasons.
    pub fn skipped_entities(&self, module: &str) -> Vec<(&str, SkipReason)> {
        let Some((module, m)) = self.modules.get_key_value(module) else {
            return Vec::new();
        };
        m.entities
            .iter()
            .filter_map(|(name, entity)| {
                self.classify(module, name, entity)
                    .err()
                    .map(|reason| (name.as_str(), reason))
            })
            .collect()
    }
}
