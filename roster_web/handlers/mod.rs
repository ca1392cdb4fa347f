pub(crate) mod helpers;
mod players;

pub use helpers::{HttpError, access_control, error_response, json_response, not_found};
pub use players::{create_player, delete_player, get_player, list_players, update_player};
