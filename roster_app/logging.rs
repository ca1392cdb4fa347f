use async_trait::async_trait;
use std::time::Instant;
use tracing::Span;

use roster_types::{Player, errors::ApplicationError};

use crate::{context::Context, service::PlayerService};

/// Decorates a `PlayerService`, logging every call with its outcome and duration.
///
/// Events are emitted as children of `logger`, so the caller decides where
/// they end up and which fields they inherit. The result of the inner service
/// is returned untouched.
pub struct LoggingService<S> {
    logger: Span,
    next: S,
}

impl<S: PlayerService> LoggingService<S> {
    pub fn new(logger: Span, next: S) -> Self {
        Self { logger, next }
    }
}

fn error_text<T>(result: &Result<T, ApplicationError>) -> Option<String> {
    result.as_ref().err().map(ToString::to_string)
}

#[async_trait]
impl<S: PlayerService> PlayerService for LoggingService<S> {
    async fn list_players(
        &self,
        ctx: &Context,
        position: &str,
    ) -> Result<Vec<Player>, ApplicationError> {
        let begin = Instant::now();
        let result = self.next.list_players(ctx, position).await;

        tracing::info!(
            parent: &self.logger,
            request_id = %ctx.request_id(),
            pos = position,
            num = result.as_ref().map_or(0, Vec::len),
            err = error_text(&result).as_deref(),
            took = ?begin.elapsed(),
            "listing players"
        );
        result
    }

    async fn get_player(&self, ctx: &Context, id: i64) -> Result<Player, ApplicationError> {
        let begin = Instant::now();
        let result = self.next.get_player(ctx, id).await;

        tracing::info!(
            parent: &self.logger,
            request_id = %ctx.request_id(),
            id,
            err = error_text(&result).as_deref(),
            took = ?begin.elapsed(),
            "getting a player"
        );
        result
    }

    async fn save_player(
        &self,
        ctx: &Context,
        player: Player,
    ) -> Result<(Player, bool), ApplicationError> {
        let begin = Instant::now();
        let (id, name) = (player.id, player.name.clone());
        let result = self.next.save_player(ctx, player).await;

        tracing::info!(
            parent: &self.logger,
            request_id = %ctx.request_id(),
            id,
            name = %name,
            created = result.as_ref().is_ok_and(|(_, created)| *created),
            err = error_text(&result).as_deref(),
            took = ?begin.elapsed(),
            "saving a player"
        );
        result
    }

    async fn delete_player(&self, ctx: &Context, id: i64) -> Result<(), ApplicationError> {
        let begin = Instant::now();
        let result = self.next.delete_player(ctx, id).await;

        tracing::info!(
            parent: &self.logger,
            request_id = %ctx.request_id(),
            id,
            err = error_text(&result).as_deref(),
            took = ?begin.elapsed(),
            "deleting a player"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        service::RosterService,
        test_utils::{MockPlayerRepository, player_factory},
    };
    use std::sync::Arc;
    use tracing_test::traced_test;

    fn setup_service(repo: &MockPlayerRepository) -> LoggingService<RosterService> {
        LoggingService::new(
            tracing::info_span!("players"),
            RosterService::new(Arc::new(repo.clone())),
        )
    }

    #[tokio::test]
    #[traced_test]
    async fn test_list_players_logs_count() {
        let repo = MockPlayerRepository::with_players(vec![
            player_factory("Blake Bortles", "5", "QB"),
            player_factory("Jalen Ramsey", "20", "CB"),
        ]);
        let service = setup_service(&repo);

        let players = service.list_players(&Context::new(), "").await.unwrap();

        assert_eq!(players.len(), 2);
        assert!(logs_contain("listing players"));
        assert!(logs_contain("num=2"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_get_player_logs_error_and_returns_it_unchanged() {
        let service = setup_service(&MockPlayerRepository::new());

        let result = service.get_player(&Context::new(), 7).await;

        assert!(matches!(result, Err(ApplicationError::NotFound)));
        assert!(logs_contain("getting a player"));
        assert!(logs_contain("id=7"));
        assert!(logs_contain("not found"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_save_player_logs_created_flag() {
        let service = setup_service(&MockPlayerRepository::new());

        let (player, created) = service
            .save_player(&Context::new(), player_factory("Blake Bortles", "5", "QB"))
            .await
            .unwrap();

        assert!(created);
        assert_eq!(player.id, 1);
        assert!(logs_contain("saving a player"));
        assert!(logs_contain("created=true"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_delete_player_logs_opaque_error_text() {
        let repo = MockPlayerRepository::new();
        repo.fail_with("database error");
        let service = setup_service(&repo);

        let err = service.delete_player(&Context::new(), 1).await.unwrap_err();

        assert_eq!(err.to_string(), "database error");
        assert!(logs_contain("deleting a player"));
        assert!(logs_contain("database error"));
    }

    #[tokio::test]
    async fn test_decorators_stack() {
        let repo = MockPlayerRepository::with_players(vec![player_factory("X", "1", "K")]);
        let service = LoggingService::new(tracing::Span::none(), setup_service(&repo));

        let player = service.get_player(&Context::new(), 1).await.unwrap();

        assert_eq!(player.name, "X");
    }
}
