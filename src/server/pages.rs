//! Static page shells for the portal and the two games

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../templates/index.html");
const SALARY_GAME_HTML: &str = include_str!("../../templates/nba-salary-game.html");
const GUESS_PLAYER_HTML: &str = include_str!("../../templates/nba-guess-player.html");

/// `GET /`
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /nba-salary-game`
pub async fn salary_game_handler() -> Html<&'static str> {
    Html(SALARY_GAME_HTML)
}

/// `GET /nba-guess-player`
pub async fn guess_player_handler() -> Html<&'static str> {
    Html(GUESS_PLAYER_HTML)
}
