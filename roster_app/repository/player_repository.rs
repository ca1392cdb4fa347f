use roster_types::{Player, errors::ApplicationError};

/// Persistence for the `players` table.
///
/// "No matching row" (an empty listing, a missing id, zero rows affected) is
/// reported as `DbError::NoRows`, so callers can tell it apart from any
/// other failure.
#[async_trait::async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Returns all players, or only the ones playing `position`, ordered by number.
    async fn list(&self, position: Option<&str>) -> Result<Vec<Player>, ApplicationError>;

    /// Returns a player by id.
    async fn get_by_id(&self, player_id: i64) -> Result<Player, ApplicationError>;

    /// Inserts a new player and returns the id assigned to it.
    async fn create(&self, player: &Player) -> Result<i64, ApplicationError>;

    /// Overwrites the stored player with the same id.
    async fn update(&self, player: &Player) -> Result<(), ApplicationError>;

    /// Deletes a player by id.
    async fn delete(&self, player_id: i64) -> Result<(), ApplicationError>;
}
