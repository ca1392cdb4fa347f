use roster_app::repository::PlayerRepository;
use roster_types::{Player, Result, errors::ApplicationError};

use crate::{
    connection::DbPool,
    mapping::{db_error, expect_one_row},
    models::{self as db_models},
};

/// Implements PlayerRepository on top of the `players` table.
#[derive(Clone)]
pub struct PostgresPlayerRepository {
    pool: DbPool,
}

impl PostgresPlayerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn list(&self, position: Option<&str>) -> Result<Vec<Player>, ApplicationError> {
        let rows = match position {
            Some(position) => {
                sqlx::query_as::<_, db_models::Player>(
                    r#"
                    SELECT id, name, number, position, height, weight, age, experience, college
                    FROM players
                    WHERE position = $1
                    ORDER BY number ASC
                    "#,
                )
                .bind(position)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, db_models::Player>(
                    r#"
                    SELECT id, name, number, position, height, weight, age, experience, college
                    FROM players
                    ORDER BY number ASC
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(db_error)?;

        if rows.is_empty() {
            return Err(db_error(sqlx::Error::RowNotFound));
        }
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, player_id: i64) -> Result<Player, ApplicationError> {
        let row = sqlx::query_as::<_, db_models::Player>(
            r#"
            SELECT id, name, number, position, height, weight, age, experience, college
            FROM players
            WHERE id = $1
            "#,
        )
        .bind(player_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(row.into())
    }

    async fn create(&self, player: &Player) -> Result<i64, ApplicationError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO players (name, number, position, height, weight, age, experience, college)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&player.name)
        .bind(&player.number)
        .bind(&player.position)
        .bind(&player.height)
        .bind(&player.weight)
        .bind(&player.age)
        .bind(player.experience)
        .bind(&player.college)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        tracing::debug!(id, "Inserted player");
        Ok(id)
    }

    async fn update(&self, player: &Player) -> Result<(), ApplicationError> {
        let result = sqlx::query(
            r#"
            UPDATE players
            SET name = $1, number = $2, position = $3, height = $4, weight = $5,
                age = $6, experience = $7, college = $8
            WHERE id = $9
            "#,
        )
        .bind(&player.name)
        .bind(&player.number)
        .bind(&player.position)
        .bind(&player.height)
        .bind(&player.weight)
        .bind(&player.age)
        .bind(player.experience)
        .bind(&player.college)
        .bind(player.id)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        expect_one_row(result.rows_affected())
    }

    async fn delete(&self, player_id: i64) -> Result<(), ApplicationError> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(player_id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        expect_one_row(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::{establish_test_connection_pool, migrate};
    use roster_app::test_utils::player_factory;
    use roster_types::errors::DbError;

    /// None when no test database is configured.
    async fn setup_repository() -> Option<PostgresPlayerRepository> {
        if std::env::var("TEST_DATABASE_URL").is_err() {
            return None;
        }
        let pool = establish_test_connection_pool().await.unwrap();
        migrate(&pool).await.unwrap();
        Some(PostgresPlayerRepository::new(pool))
    }

    /// Each test writes under its own position so they don't see each other's rows.
    fn unique_position(tag: &str) -> String {
        format!("T-{tag}-{}", std::process::id())
    }

    #[tokio::test]
    async fn test_create_get_update_delete() {
        let Some(repo) = setup_repository().await else {
            return;
        };
        let position = unique_position("crud");

        let mut player = player_factory("Blake Bortles", "5", &position);
        let id = repo.create(&player).await.unwrap();
        assert!(id > 0);

        player = player.with_id(id);
        assert_eq!(repo.get_by_id(id).await.unwrap(), player);

        player.college = "UCF".to_string();
        repo.update(&player).await.unwrap();
        assert_eq!(repo.get_by_id(id).await.unwrap().college, "UCF");

        repo.delete(id).await.unwrap();
        let result = repo.get_by_id(id).await;
        assert!(matches!(result, Err(ApplicationError::Db(DbError::NoRows))));
    }

    #[tokio::test]
    async fn test_list_filters_and_orders_by_number() {
        let Some(repo) = setup_repository().await else {
            return;
        };
        let position = unique_position("list");

        let first = repo
            .create(&player_factory("Jalen Ramsey", "20", &position))
            .await
            .unwrap();
        let second = repo
            .create(&player_factory("Blake Bortles", "5", &position))
            .await
            .unwrap();

        let players = repo.list(Some(position.as_str())).await.unwrap();
        let numbers: Vec<&str> = players.iter().map(|p| p.number.as_str()).collect();

        assert_eq!(players.len(), 2);
        let mut sorted = numbers.clone();
        sorted.sort();
        assert_eq!(numbers, sorted);

        repo.delete(first).await.unwrap();
        repo.delete(second).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_without_match_is_no_rows() {
        let Some(repo) = setup_repository().await else {
            return;
        };

        let result = repo.list(Some(unique_position("empty").as_str())).await;

        assert!(matches!(result, Err(ApplicationError::Db(DbError::NoRows))));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_row_is_no_rows() {
        let Some(repo) = setup_repository().await else {
            return;
        };
        let missing = player_factory("Nobody", "0", "K").with_id(i64::MAX);

        assert!(matches!(
            repo.update(&missing).await,
            Err(ApplicationError::Db(DbError::NoRows))
        ));
        assert!(matches!(
            repo.delete(i64::MAX).await,
            Err(ApplicationError::Db(DbError::NoRows))
        ));
    }
}
