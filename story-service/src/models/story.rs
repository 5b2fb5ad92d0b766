use serde::{Deserialize, Serialize};

/// A generated story as returned by the text generator.
///
/// Every field is defaulted so a partially-filled generator response
/// still deserializes; `moral` is genuinely optional and omitted from
/// the serialized response when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Story {
    #[serde(default)]
    pub title: String,

    /// Theme echoed back by the generator.
    #[serde(default)]
    pub theme: String,

    #[serde(default)]
    pub genre: String,

    #[serde(default)]
    pub length: String,

    /// Names and short descriptions of the characters, in order of
    /// appearance.
    #[serde(default)]
    pub characters: Vec<String>,

    /// Story paragraphs in reading order.
    #[serde(default)]
    pub body: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moral: Option<String>,
}
