pub mod activity;
pub mod audio;
pub mod mood;
pub mod time_of_day;
pub mod user_context;

pub use activity::Activity;
pub use audio::derive_context;
pub use mood::Mood;
pub use time_of_day::TimeOfDay;
pub use user_context::UserContext;
