use serde::{Deserialize, Serialize};
use std::fmt;

use crate::taxonomy::{Activity, Mood, TimeOfDay};

/// A listener's situation, rendered into the query string the matcher sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub mood: Mood,
    pub activity: Activity,
    pub time_of_day: TimeOfDay,
}

impl UserContext {
    #[must_use]
    pub const fn new(mood: Mood, activity: Activity, time_of_day: TimeOfDay) -> Self {
        Self {
            mood,
            activity,
            time_of_day,
        }
    }

    /// Context for the current local time.
    #[must_use]
    pub fn now(mood: Mood, activity: Activity) -> Self {
        Self::new(mood, activity, TimeOfDay::now())
    }

    #[must_use]
    pub fn to_query(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for UserContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.mood, self.activity, self.time_of_day)
    }
}
