use async_trait::async_trait;
use std::sync::Arc;

use roster_types::{
    Player,
    errors::{ApplicationError, DbError},
};

use crate::{context::Context, repository::PlayerRepository};

/// The operations offered on the roster.
#[async_trait]
pub trait PlayerService: Send + Sync {
    /// Lists players ordered by number, optionally restricted to a position.
    /// An empty `position` means every player.
    async fn list_players(
        &self,
        ctx: &Context,
        position: &str,
    ) -> Result<Vec<Player>, ApplicationError>;

    async fn get_player(&self, ctx: &Context, id: i64) -> Result<Player, ApplicationError>;

    /// Creates the player when it's new, updates it otherwise.
    /// Returns the saved player and whether it was created.
    async fn save_player(
        &self,
        ctx: &Context,
        player: Player,
    ) -> Result<(Player, bool), ApplicationError>;

    async fn delete_player(&self, ctx: &Context, id: i64) -> Result<(), ApplicationError>;
}

/// `PlayerService` backed by a `PlayerRepository`.
#[derive(Clone)]
pub struct RosterService {
    players: Arc<dyn PlayerRepository>,
}

impl RosterService {
    pub fn new(players: Arc<dyn PlayerRepository>) -> Self {
        Self { players }
    }
}

#[async_trait]
impl PlayerService for RosterService {
    async fn list_players(
        &self,
        _ctx: &Context,
        position: &str,
    ) -> Result<Vec<Player>, ApplicationError> {
        let position = (!position.is_empty()).then_some(position);
        self.players.list(position).await.map_err(not_found)
    }

    async fn get_player(&self, _ctx: &Context, id: i64) -> Result<Player, ApplicationError> {
        self.players.get_by_id(id).await.map_err(not_found)
    }

    async fn save_player(
        &self,
        _ctx: &Context,
        player: Player,
    ) -> Result<(Player, bool), ApplicationError> {
        if player.is_new() {
            let id = self.players.create(&player).await.map_err(not_found)?;
            return Ok((player.with_id(id), true));
        }

        self.players.update(&player).await.map_err(not_found)?;
        Ok((player, false))
    }

    async fn delete_player(&self, _ctx: &Context, id: i64) -> Result<(), ApplicationError> {
        self.players.delete(id).await.map_err(not_found)
    }
}

/// Maps the repository "no rows" signal to `NotFound`, leaves anything else untouched.
fn not_found(err: ApplicationError) -> ApplicationError {
    match err {
        ApplicationError::Db(DbError::NoRows) => ApplicationError::NotFound,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockPlayerRepository, player_factory};

    fn setup_service(repo: &MockPlayerRepository) -> RosterService {
        RosterService::new(Arc::new(repo.clone()))
    }

    #[tokio::test]
    async fn test_list_players_orders_by_number_as_text() {
        let repo = MockPlayerRepository::with_players(vec![
            player_factory("Blake Bortles", "5", "QB"),
            player_factory("Jalen Ramsey", "20", "CB"),
        ]);
        let service = setup_service(&repo);

        let players = service.list_players(&Context::new(), "").await.unwrap();

        let numbers: Vec<&str> = players.iter().map(|p| p.number.as_str()).collect();
        assert_eq!(numbers, vec!["20", "5"], "numbers compare as strings");
    }

    #[tokio::test]
    async fn test_list_players_filters_by_exact_position() {
        let repo = MockPlayerRepository::with_players(vec![
            player_factory("Blake Bortles", "5", "QB"),
            player_factory("Jalen Ramsey", "20", "CB"),
        ]);
        let service = setup_service(&repo);

        let players = service.list_players(&Context::new(), "QB").await.unwrap();

        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name, "Blake Bortles");

        let result = service.list_players(&Context::new(), "qb").await;
        assert!(matches!(result, Err(ApplicationError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_players_empty_store_is_not_found() {
        let service = setup_service(&MockPlayerRepository::new());

        let result = service.list_players(&Context::new(), "").await;

        assert!(matches!(result, Err(ApplicationError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_players_passes_other_errors_through() {
        let repo = MockPlayerRepository::new();
        repo.fail_with("database error");
        let service = setup_service(&repo);

        let err = service.list_players(&Context::new(), "").await.unwrap_err();

        assert!(matches!(err, ApplicationError::Unknown(_)));
        assert_eq!(err.to_string(), "database error");
    }

    #[tokio::test]
    async fn test_get_player_missing_is_not_found() {
        let service = setup_service(&MockPlayerRepository::new());

        let result = service.get_player(&Context::new(), 1).await;

        assert!(matches!(result, Err(ApplicationError::NotFound)));
    }

    #[tokio::test]
    async fn test_save_new_player_creates_it() {
        let repo = MockPlayerRepository::new();
        let service = setup_service(&repo);

        let (player, created) = service
            .save_player(&Context::new(), player_factory("X", "1", "K"))
            .await
            .unwrap();

        assert!(created);
        assert_eq!(player.id, 1, "first id assigned by the store");
        assert_eq!(player.name, "X");
    }

    #[tokio::test]
    async fn test_save_negative_id_creates_player() {
        let service = setup_service(&MockPlayerRepository::new());

        let (player, created) = service
            .save_player(&Context::new(), player_factory("X", "1", "K").with_id(-7))
            .await
            .unwrap();

        assert!(created);
        assert!(player.id > 0);
    }

    #[tokio::test]
    async fn test_save_existing_player_updates_it() {
        let repo =
            MockPlayerRepository::with_players(vec![player_factory("Blake Bortles", "5", "QB")]);
        let service = setup_service(&repo);

        let mut player = service.get_player(&Context::new(), 1).await.unwrap();
        player.college = "UCF".to_string();

        let (saved, created) = service
            .save_player(&Context::new(), player)
            .await
            .unwrap();

        assert!(!created);
        assert_eq!(saved.id, 1, "id is unchanged on update");
        let stored = service.get_player(&Context::new(), 1).await.unwrap();
        assert_eq!(stored.college, "UCF");
    }

    #[tokio::test]
    async fn test_save_unknown_id_is_not_found() {
        let service = setup_service(&MockPlayerRepository::new());

        let result = service
            .save_player(&Context::new(), player_factory("X", "1", "K").with_id(42))
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound)));
    }

    #[tokio::test]
    async fn test_save_create_failure_passes_error_through() {
        let repo = MockPlayerRepository::new();
        repo.fail_with("database error");
        let service = setup_service(&repo);

        let err = service
            .save_player(&Context::new(), player_factory("X", "1", "K"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "database error");
    }

    #[tokio::test]
    async fn test_delete_player_missing_is_not_found() {
        let service = setup_service(&MockPlayerRepository::new());

        let result = service.delete_player(&Context::new(), 1).await;

        assert!(matches!(result, Err(ApplicationError::NotFound)));
    }

    #[tokio::test]
    async fn test_save_get_delete_lifecycle() {
        let service = setup_service(&MockPlayerRepository::new());
        let ctx = Context::new();

        let (player, created) = service
            .save_player(&ctx, player_factory("X", "1", "K"))
            .await
            .unwrap();
        assert!(created);
        assert_eq!(player.id, 1);

        let fetched = service.get_player(&ctx, 1).await.unwrap();
        assert_eq!(fetched, player);

        service.delete_player(&ctx, 1).await.unwrap();

        let result = service.get_player(&ctx, 1).await;
        assert!(matches!(result, Err(ApplicationError::NotFound)));
    }
}
