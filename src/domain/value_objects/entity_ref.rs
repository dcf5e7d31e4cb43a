use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Anything addressable by a stable identifier.
pub trait HasId {
    fn id(&self) -> Uuid;
}

/// Resolution state of a relationship reference.
///
/// A reference field holds either a bare identifier or, after a resolution
/// pass, the full embedded entity; never a mix within one render pass.
/// Dangling identifiers become `Missing` so consumers treat the relation as
/// absent instead of failing the page. A to-many field is `Vec<Ref<T>>`;
/// an empty vector means the field legitimately has zero targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ref<T> {
    Unresolved(Uuid),
    Resolved(Box<T>),
    Missing(Uuid),
}

impl<T> Ref<T> {
    pub fn unresolved(id: Uuid) -> Self {
        Ref::Unresolved(id)
    }

    pub fn resolved(entity: T) -> Self {
        Ref::Resolved(Box::new(entity))
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Ref::Resolved(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Ref::Missing(_))
    }

    pub fn entity(&self) -> Option<&T> {
        match self {
            Ref::Resolved(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn into_entity(self) -> Option<T> {
        match self {
            Ref::Resolved(entity) => Some(*entity),
            _ => None,
        }
    }
}

impl<T: HasId> Ref<T> {
    /// Identifier of the target, regardless of resolution state.
    pub fn target_id(&self) -> Uuid {
        match self {
            Ref::Unresolved(id) | Ref::Missing(id) => *id,
            Ref::Resolved(entity) => entity.id(),
        }
    }
}
