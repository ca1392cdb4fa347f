use sqlx::FromRow;

#[derive(Debug, FromRow, Clone)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub number: String,
    pub position: String,
    pub height: String,
    pub weight: String,
    pub age: String,
    pub experience: i32,
    pub college: String,
}
