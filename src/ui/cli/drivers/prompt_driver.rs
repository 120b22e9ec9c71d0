use anyhow::Result;

/// Question-level prompts, so the wizard can run against a scripted driver.
pub trait PromptDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool>;
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String>;
    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64>;

    /// Picks one of `options` by index.
    fn select(&self, title: &str, help: Option<&str>, options: &[String]) -> Result<usize>;
}
