use roster_types::{
    Player,
    errors::{ApplicationError, DbError},
};

use crate::models::{self as db_models};

impl From<db_models::Player> for Player {
    fn from(row: db_models::Player) -> Self {
        Player {
            id: row.id,
            name: row.name,
            number: row.number,
            position: row.position,
            height: row.height,
            weight: row.weight,
            age: row.age,
            experience: row.experience,
            college: row.college,
        }
    }
}

/// `RowNotFound` becomes the "no rows" signal, anything else stays a database error.
pub fn db_error(err: sqlx::Error) -> ApplicationError {
    match err {
        sqlx::Error::RowNotFound => ApplicationError::Db(DbError::NoRows),
        other => ApplicationError::Db(DbError::Database(other)),
    }
}

/// Statements touching a single row by id must affect exactly one.
pub fn expect_one_row(rows_affected: u64) -> Result<(), ApplicationError> {
    match rows_affected {
        1 => Ok(()),
        _ => Err(ApplicationError::Db(DbError::NoRows)),
    }
}
