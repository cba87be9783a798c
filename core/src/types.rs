//! Domain DTOs for the hero API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! `Entity` is what the client is generic over: it names the resource for
//! log messages and separates the create payload (`Draft`, no id) from the
//! stored record, since the server assigns identifiers.

use std::fmt::{Debug, Display};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record of the managed resource.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync {
    type Id: Copy + Debug + Display + Eq + Send + Sync;

    /// Payload sent on create.
    type Draft: Serialize + Send + Sync;

    /// Lowercase singular name, e.g. `hero`.
    const SINGULAR: &'static str;

    /// Lowercase plural name, e.g. `heroes`.
    const PLURAL: &'static str;

    fn id(&self) -> Self::Id;
}

pub type HeroId = u32;

/// A single hero returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

/// Request payload for creating a new hero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
}

impl Entity for Hero {
    type Id = HeroId;
    type Draft = NewHero;

    const SINGULAR: &'static str = "hero";
    const PLURAL: &'static str = "heroes";

    fn id(&self) -> HeroId {
        self.id
    }
}

/// What `delete` accepts: either a full record or just its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget<E: Entity> {
    ByEntity(E),
    ById(E::Id),
}

impl<E: Entity> DeleteTarget<E> {
    pub fn id(&self) -> E::Id {
        match self {
            DeleteTarget::ByEntity(entity) => entity.id(),
            DeleteTarget::ById(id) => *id,
        }
    }
}

impl From<Hero> for DeleteTarget<Hero> {
    fn from(hero: Hero) -> Self {
        DeleteTarget::ByEntity(hero)
    }
}

impl From<&Hero> for DeleteTarget<Hero> {
    fn from(hero: &Hero) -> Self {
        DeleteTarget::ById(hero.id)
    }
}

impl From<HeroId> for DeleteTarget<Hero> {
    fn from(id: HeroId) -> Self {
        DeleteTarget::ById(id)
    }
}
