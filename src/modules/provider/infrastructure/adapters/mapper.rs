use crate::modules::provider::domain::entities::GameScore;
use crate::shared::errors::AppError;

/// Main mapper trait for converting a league's game payload to a GameScore
pub trait ScoreMapper<T> {
    /// Map one provider game to a domain GameScore
    fn map_to_game_score(&self, source: T) -> Result<GameScore, AppError>;

    /// Map a list of provider games
    fn map_to_game_scores(&self, sources: Vec<T>) -> Result<Vec<GameScore>, AppError> {
        sources
            .into_iter()
            .map(|source| self.map_to_game_score(source))
            .collect()
    }
}
