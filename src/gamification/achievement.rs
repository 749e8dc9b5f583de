//! Achievement notifications
//!
//! Transient, UI-facing descriptions of a points award, a level-up or a badge
//! unlock. They are queued for display and never persisted.

use serde::Serialize;
use uuid::Uuid;

use super::levels::LevelInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    Points,
    Level,
    Badge,
}

/// Animation hint for the toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    Confetti,
    Pulse,
    Bounce,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AchievementValue {
    Number(u32),
    Text(String),
}

impl std::fmt::Display for AchievementValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    /// Time-ordered unique id (UUID v7)
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AchievementKind,
    pub value: AchievementValue,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

impl Achievement {
    pub fn points(delta: u32) -> Self {
        Self {
            id: new_id(),
            kind: AchievementKind::Points,
            value: AchievementValue::Number(delta),
            message: format!("+{} puntos", delta),
            animation: Some(Animation::Pulse),
        }
    }

    pub fn level(level: &LevelInfo) -> Self {
        Self {
            id: new_id(),
            kind: AchievementKind::Level,
            value: AchievementValue::Number(level.level),
            message: format!(
                "¡Subiste a nivel {}: {} {}!",
                level.level, level.emoji, level.name
            ),
            animation: Some(Animation::Confetti),
        }
    }

    pub fn badge(badge_id: &str, display_name: &str) -> Self {
        Self {
            id: new_id(),
            kind: AchievementKind::Badge,
            value: AchievementValue::Text(badge_id.to_string()),
            message: format!("¡Insignia desbloqueada: {}!", display_name),
            animation: Some(Animation::Bounce),
        }
    }
}

fn new_id() -> String {
    Uuid::now_v7().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = Achievement::points(5);
        let b = Achievement::points(5);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serialized_shape() {
        let badge = Achievement::badge("firstPhoto", "Fotogénico");
        let json = serde_json::to_value(&badge).unwrap();
        assert_eq!(json["type"], "badge");
        assert_eq!(json["value"], "firstPhoto");
        assert_eq!(json["animation"], "bounce");
        assert_eq!(json["message"], "¡Insignia desbloqueada: Fotogénico!");
    }
}
