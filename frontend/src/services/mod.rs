pub mod api;
pub mod auth;
pub mod date_utils;
pub mod logging;

/// Collaborator endpoint defaults (local Supabase stack). Deployments
/// override these through the `with_config` constructors.
pub const DEFAULT_SUPABASE_URL: &str = "http://localhost:54321";
pub const DEFAULT_SUPABASE_ANON_KEY: &str = "local-anon-key";
