//! Built-in configuration table

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::Config;
use crate::gamification::{ActionKind, BadgeDef, LevelInfo, Rules};

/// Validated rules for the built-in table
pub static DEFAULT_RULES: Lazy<Rules> = Lazy::new(|| {
    Config::with_defaults()
        .rules()
        .expect("built-in gamification table is valid")
});

impl Default for Rules {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}

impl Config {
    /// Create a config with the built-in tables
    pub fn with_defaults() -> Self {
        let actions = [
            (ActionKind::DailyLogin, 5),
            (ActionKind::CompleteOnboarding, 50),
            (ActionKind::CompleteProfileField, 10),
            (ActionKind::FavoritePromo, 5),
            (ActionKind::SharePromo, 15),
            (ActionKind::VisitLocation, 20),
            (ActionKind::UploadPhoto, 25),
            (ActionKind::WriteReview, 20),
        ]
        .into_iter()
        .map(|(kind, points)| (kind.as_str().to_string(), points))
        .collect();

        let level = |level, min, max, name: &str, emoji: &str, color: &str| LevelInfo {
            level,
            min,
            max,
            name: name.to_string(),
            emoji: emoji.to_string(),
            color: color.to_string(),
        };
        let levels = vec![
            level(1, 0, 100, "Novato", "🌱", "#9CA3AF"),
            level(2, 101, 300, "Explorador", "🔍", "#3B82F6"),
            level(3, 301, 600, "Cazador de Ofertas", "🎯", "#10B981"),
            level(4, 601, 1000, "Experto", "⭐", "#F59E0B"),
            level(5, 1001, 2000, "Maestro", "👑", "#8B5CF6"),
            level(6, 2001, 5000, "Leyenda", "🏆", "#EF4444"),
        ];

        let badges: BTreeMap<String, BadgeDef> = [
            ("onboardingComplete", "Bienvenido", "Completaste la introducción"),
            ("profileComplete", "Perfil Completo", "Completaste todos los datos de tu perfil"),
            ("firstPhoto", "Fotogénico", "Subiste tu primera foto"),
            ("firstFavorite", "Coleccionista", "Guardaste tu primera promo favorita"),
            ("firstShare", "Embajador", "Compartiste una promo por primera vez"),
            ("streak7", "Constante", "Entraste 7 días seguidos"),
            ("explorer", "Explorador Urbano", "Visitaste 5 locales diferentes"),
        ]
        .into_iter()
        .map(|(id, name, description)| {
            (
                id.to_string(),
                BadgeDef {
                    name: name.to_string(),
                    description: description.to_string(),
                },
            )
        })
        .collect();

        Self {
            actions,
            levels,
            badges,
            queue: super::QueueSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        let rules = &*DEFAULT_RULES;
        assert_eq!(rules.levels.first().level, 1);
        assert_eq!(rules.levels.highest().level, 6);
        for kind in ActionKind::all() {
            assert!(rules.points.get(*kind).is_some(), "{} has no price", kind);
        }
        assert_eq!(rules.badges.get("firstPhoto").unwrap().name, "Fotogénico");
    }
}
