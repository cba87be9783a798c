use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}

#[derive(Deserialize)]
pub struct NewHero {
    pub name: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

pub type Db = Arc<RwLock<BTreeMap<u32, Hero>>>;

/// Id handed out when the collection is empty.
const FIRST_ID: u32 = 11;

pub fn seed_heroes() -> Vec<Hero> {
    [
        (11, "Dr. Nice"),
        (12, "Bombasto"),
        (13, "Celeritas"),
        (14, "Magneta"),
        (15, "RubberMan"),
        (16, "Dynama"),
        (17, "Dr. IQ"),
        (18, "Magma"),
        (19, "Tornado"),
        (20, "Dr. Strange"),
    ]
    .into_iter()
    .map(|(id, name)| Hero {
        id,
        name: name.to_string(),
    })
    .collect()
}

/// Router seeded with the default roster.
pub fn app() -> Router {
    app_with(seed_heroes())
}

pub fn app_with(heroes: Vec<Hero>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        heroes.into_iter().map(|hero| (hero.id, hero)).collect(),
    ));
    Router::new()
        .route(
            "/api/heroes",
            get(list_heroes).post(create_hero).put(update_hero),
        )
        .route("/api/heroes/", get(list_heroes))
        .route("/api/heroes/{id}", get(get_hero).delete(delete_hero))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_heroes(State(db): State<Db>, Query(params): Query<SearchParams>) -> Json<Vec<Hero>> {
    let heroes = db.read().await;
    let needle = params.name.map(|name| name.to_lowercase());
    Json(
        heroes
            .values()
            .filter(|hero| match &needle {
                Some(needle) => hero.name.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .cloned()
            .collect(),
    )
}

async fn create_hero(
    State(db): State<Db>,
    Json(input): Json<NewHero>,
) -> Result<(StatusCode, Json<Hero>), StatusCode> {
    let mut heroes = db.write().await;
    let id = match heroes.keys().next_back() {
        Some(max) => max.checked_add(1).ok_or(StatusCode::INSUFFICIENT_STORAGE)?,
        None => FIRST_ID,
    };
    let hero = Hero {
        id,
        name: input.name,
    };
    heroes.insert(id, hero.clone());
    tracing::debug!(id, "hero created");
    Ok((StatusCode::CREATED, Json(hero)))
}

async fn get_hero(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Hero>, StatusCode> {
    let heroes = db.read().await;
    heroes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_hero(State(db): State<Db>, Json(input): Json<Hero>) -> StatusCode {
    let mut heroes = db.write().await;
    match heroes.get_mut(&input.id) {
        Some(hero) => {
            hero.name = input.name;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_hero(State(db): State<Db>, Path(id): Path<u32>) -> StatusCode {
    let mut heroes = db.write().await;
    heroes
        .remove(&id)
        .map_or(StatusCode::NOT_FOUND, |_| StatusCode::NO_CONTENT)
}
