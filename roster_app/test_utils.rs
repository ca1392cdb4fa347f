use async_trait::async_trait;
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use roster_types::{
    Player,
    errors::{ApplicationError, DbError},
};

use crate::repository::PlayerRepository;

/// Builds an unsaved player with plausible defaults for the other fields.
pub fn player_factory(name: &str, number: &str, position: &str) -> Player {
    Player {
        id: 0,
        name: name.to_string(),
        number: number.to_string(),
        position: position.to_string(),
        height: "6-2".to_string(),
        weight: "210".to_string(),
        age: "25".to_string(),
        experience: 3,
        college: "Florida".to_string(),
    }
}

#[derive(Default)]
struct MockStore {
    players: BTreeMap<i64, Player>,
    last_id: i64,
    failure: Option<String>,
}

/// In-memory `PlayerRepository` mimicking the `players` table.
#[derive(Default, Clone)]
pub struct MockPlayerRepository {
    store: Arc<Mutex<MockStore>>,
}

impl MockPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store; players get ids 1, 2, ... in the given order.
    pub fn with_players(players: Vec<Player>) -> Self {
        let repo = Self::new();
        {
            let mut store = repo.store.lock().unwrap();
            for player in players {
                store.last_id += 1;
                let id = store.last_id;
                store.players.insert(id, player.with_id(id));
            }
        }
        repo
    }

    /// Makes every following call fail with an opaque error carrying `message`.
    pub fn fail_with(&self, message: &str) {
        self.store.lock().unwrap().failure = Some(message.to_string());
    }

    pub fn len(&self) -> usize {
        self.store.lock().unwrap().players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_failure(store: &MockStore) -> Result<(), ApplicationError> {
        match &store.failure {
            Some(message) => Err(ApplicationError::Unknown(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PlayerRepository for MockPlayerRepository {
    async fn list(&self, position: Option<&str>) -> Result<Vec<Player>, ApplicationError> {
        let store = self.store.lock().unwrap();
        Self::check_failure(&store)?;

        let mut players: Vec<Player> = store
            .players
            .values()
            .filter(|p| position.is_none_or(|pos| p.position == pos))
            .cloned()
            .collect();
        players.sort_by(|a, b| a.number.cmp(&b.number));

        if players.is_empty() {
            return Err(ApplicationError::Db(DbError::NoRows));
        }
        Ok(players)
    }

    async fn get_by_id(&self, player_id: i64) -> Result<Player, ApplicationError> {
        let store = self.store.lock().unwrap();
        Self::check_failure(&store)?;

        store
            .players
            .get(&player_id)
            .cloned()
            .ok_or(ApplicationError::Db(DbError::NoRows))
    }

    async fn create(&self, player: &Player) -> Result<i64, ApplicationError> {
        let mut store = self.store.lock().unwrap();
        Self::check_failure(&store)?;

        store.last_id += 1;
        let id = store.last_id;
        store.players.insert(id, player.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, player: &Player) -> Result<(), ApplicationError> {
        let mut store = self.store.lock().unwrap();
        Self::check_failure(&store)?;

        match store.players.get_mut(&player.id) {
            Some(stored) => {
                *stored = player.clone();
                Ok(())
            }
            None => Err(ApplicationError::Db(DbError::NoRows)),
        }
    }

    async fn delete(&self, player_id: i64) -> Result<(), ApplicationError> {
        let mut store = self.store.lock().unwrap();
        Self::check_failure(&store)?;

        store
            .players
            .remove(&player_id)
            .map(|_| ())
            .ok_or(ApplicationError::Db(DbError::NoRows))
    }
}
