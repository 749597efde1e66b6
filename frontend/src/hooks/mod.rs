pub mod use_calorie_entries;
pub mod use_session;

pub use use_calorie_entries::use_calorie_entries;
pub use use_session::use_session;
