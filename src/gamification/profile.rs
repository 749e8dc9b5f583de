//! Profile completion
//!
//! Single source for the completion percentage shown on the home dashboard and
//! the profile page. Each of the four fields is worth 25% once filled in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileSnapshot {
    /// 0, 25, 50, 75 or 100
    pub fn completion_percent(&self) -> u8 {
        let filled = [&self.name, &self.email, &self.phone, &self.avatar]
            .into_iter()
            .filter(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()))
            .count();
        (filled * 25) as u8
    }

    pub fn is_complete(&self) -> bool {
        self.completion_percent() == 100
    }
}
