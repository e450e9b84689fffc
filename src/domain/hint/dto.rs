use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Hint request DTO.
///
/// `ball`, `goal` and `lines` are opaque to the server: their internal
/// structure is never interpreted, only interpolated into the prompt. The
/// typed fields still enforce the expected shape (mappings and an ordered
/// sequence) at the extractor boundary.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct HintRequest {
    /// Question the player typed into the hint box.
    #[schema(example = "Why won't the ball reach the goal?")]
    pub user_message: String,

    /// Current ball state, e.g. positional coordinates.
    #[schema(value_type = Object)]
    pub ball: Map<String, Value>,

    /// Goal state, same shape as `ball`.
    #[schema(value_type = Object)]
    pub goal: Map<String, Value>,

    /// Line segments the player has drawn, in draw order.
    #[schema(value_type = Vec<Object>)]
    pub lines: Vec<Value>,
}

/// Hint response DTO.
#[derive(Debug, Serialize, ToSchema)]
pub struct HintResponse {
    /// Generated hint text.
    pub reply: String,
}
