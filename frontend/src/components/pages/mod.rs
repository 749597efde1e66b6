pub mod calories;
pub mod dashboard;
pub mod login;
pub mod nutrition;
pub mod quiz;
pub mod workout;

pub use calories::CaloriesPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use nutrition::NutritionPage;
pub use quiz::QuizPage;
pub use workout::WorkoutPage;
