//! Running score for the current life and the session highscore.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub score: u32,
    /// Running max of `score`; survives respawns.
    pub highscore: u32,
}

impl ScoreBoard {
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.highscore = self.highscore.max(self.score);
    }

    /// Called when the player respawns.
    pub fn reset(&mut self) {
        self.score = 0;
    }

    pub fn hud_text(&self) -> String {
        format!("Score: {}\nHighscore: {}", self.score, self.highscore)
    }
}
