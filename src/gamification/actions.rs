//! Point-earning actions
//!
//! The set of actions is closed. The points each one is worth come from
//! configuration and are fixed once `Config::rules` has run.

use std::collections::HashMap;

/// Every action the app can award points for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    DailyLogin,
    CompleteOnboarding,
    CompleteProfileField,
    FavoritePromo,
    SharePromo,
    VisitLocation,
    UploadPhoto,
    WriteReview,
}

impl ActionKind {
    /// Key used in configuration files and by callers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DailyLogin => "dailyLogin",
            Self::CompleteOnboarding => "completeOnboarding",
            Self::CompleteProfileField => "completeProfileField",
            Self::FavoritePromo => "favoritePromo",
            Self::SharePromo => "sharePromo",
            Self::VisitLocation => "visitLocation",
            Self::UploadPhoto => "uploadPhoto",
            Self::WriteReview => "writeReview",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.as_str() == s)
    }

    pub fn all() -> &'static [ActionKind] {
        &[
            Self::DailyLogin,
            Self::CompleteOnboarding,
            Self::CompleteProfileField,
            Self::FavoritePromo,
            Self::SharePromo,
            Self::VisitLocation,
            Self::UploadPhoto,
            Self::WriteReview,
        ]
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Points awarded per action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointsTable {
    points: HashMap<ActionKind, u32>,
}

impl PointsTable {
    pub fn new(points: HashMap<ActionKind, u32>) -> Self {
        Self { points }
    }

    pub fn get(&self, kind: ActionKind) -> Option<u32> {
        self.points.get(&kind).copied()
    }

    /// Resolve a caller-supplied key. `None` for keys outside the enumeration
    /// and for actions the configuration leaves unpriced.
    pub fn points_for(&self, key: &str) -> Option<u32> {
        ActionKind::from_str(key).and_then(|kind| self.get(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionKind, u32)> + '_ {
        self.points.iter().map(|(kind, points)| (*kind, *points))
    }
}
