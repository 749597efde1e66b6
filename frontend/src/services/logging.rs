use gloo::console;

/// Component-tagged logger over the browser console.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        console::debug!(Self::tagged(component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        console::info!(Self::tagged(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(Self::tagged(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(Self::tagged(component, message));
    }

    fn tagged(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_format() {
        assert_eq!(Logger::tagged("quiz", "reset"), "[quiz] reset");
    }
}
