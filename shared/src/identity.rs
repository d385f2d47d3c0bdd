//! Identifier based equality and deduplication.
//!
//! Entities are compared by their numeric identifier only. Relationships
//! between entities are carried as [`Ref`]s, which hold nothing but the
//! identifier of the referenced record.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A record that carries a backend assigned identifier.
pub trait Identified {
    fn identifier(&self) -> i64;
}

/// Reference to another entity by identifier only.
pub struct Ref<E> {
    pub id: i64,
    kind: PhantomData<fn() -> E>,
}

impl<E> Ref<E> {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            kind: PhantomData,
        }
    }
}

impl<E: Identified> From<&E> for Ref<E> {
    fn from(entity: &E) -> Self {
        Ref::new(entity.identifier())
    }
}

impl<E> Identified for Ref<E> {
    fn identifier(&self) -> i64 {
        self.id
    }
}

impl<E> Clone for Ref<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Ref<E> {}

impl<E> PartialEq for Ref<E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<E> Eq for Ref<E> {}

impl<E> Hash for Ref<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<E> fmt::Debug for Ref<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ref").field("id", &self.id).finish()
    }
}

// On the wire a reference is `{"id": n}`; the backend embeds the whole
// related record, whose other fields are ignored.
#[derive(Serialize, Deserialize)]
struct RefBody {
    id: i64,
}

impl<E> Serialize for Ref<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RefBody { id: self.id }.serialize(serializer)
    }
}

impl<'de, E> Deserialize<'de> for Ref<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let body = RefBody::deserialize(deserializer)?;
        Ok(Ref::new(body.id))
    }
}

/// Compares two optional records by identifier.
///
/// Two absent records are equal, an absent and a present one never are.
pub fn equals_by_id<T: Identified + ?Sized>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.identifier() == b.identifier(),
        (None, None) => true,
        _ => false,
    }
}

/// Prepends every candidate whose identifier is not in `collection` yet.
///
/// Absent candidates are skipped, and a candidate repeated in the same call
/// is only added once. Accepted candidates keep the order they were passed
/// in. When nothing is accepted the original slice is handed back borrowed.
pub fn add_to_collection_if_missing<'a, T, I>(collection: &'a [T], candidates: I) -> Cow<'a, [T]>
where
    T: Identified + Clone,
    I: IntoIterator<Item = Option<T>>,
{
    let accepted = accept_missing(collection, candidates);
    if accepted.is_empty() {
        return Cow::Borrowed(collection);
    }

    let mut merged = accepted;
    merged.extend_from_slice(collection);
    Cow::Owned(merged)
}

/// Owned flavour of [`add_to_collection_if_missing`].
///
/// Returns the very same vector when no candidate is accepted.
pub fn merge_missing<T, I>(collection: Vec<T>, candidates: I) -> Vec<T>
where
    T: Identified,
    I: IntoIterator<Item = Option<T>>,
{
    let mut accepted = accept_missing(&collection, candidates);
    if accepted.is_empty() {
        return collection;
    }

    accepted.extend(collection);
    accepted
}

fn accept_missing<T, I>(collection: &[T], candidates: I) -> Vec<T>
where
    T: Identified,
    I: IntoIterator<Item = Option<T>>,
{
    let mut known: Option<HashSet<i64>> = None;
    let mut accepted = Vec::new();

    for candidate in candidates.into_iter().flatten() {
        let known = known
            .get_or_insert_with(|| collection.iter().map(Identified::identifier).collect());
        if known.insert(candidate.identifier()) {
            accepted.push(candidate);
        }
    }

    accepted
}
