use serde_json::Value;

use super::dto::HintRequest;

/// Prompt template for the in-game hint.
pub struct HintPrompt;

impl HintPrompt {
    /// Renders the instruction template around the raw request fields.
    ///
    /// The question goes in verbatim; `ball`, `goal` and `lines` are
    /// interpolated as their JSON text. The game rules are fixed template
    /// text the model needs to give answers that match what the player can
    /// actually do.
    pub fn render(request: &HintRequest) -> String {
        let ball = Value::Object(request.ball.clone());
        let goal = Value::Object(request.goal.clone());
        let lines = Value::Array(request.lines.clone());

        format!(
            r#"You are a team of scientists inside a 2D physics sandbox demo for kids.

User question:
{user_message}

Ball position: {ball}
Goal position: {goal}
Drawn lines: {lines}

Explain clearly and briefly use simple words that a child could understand. No more than three small sentences.
Do not speak in terms of coordinates. Use relative positions of objects on the screen.
The player is unable to remove lines on the screen.
Sometimes the level is not completable, and they will have to click restart. The ball cannot gain momentum, and can only drop.
The player has to click "Release Ball" in order for the game to begin."#,
            user_message = request.user_message,
        )
    }
}
