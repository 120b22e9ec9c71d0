use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{Confirm, CustomType, Select, Text, validator::Validation};

pub struct InquireDriver;

fn range_message(min: Option<u64>, max: Option<u64>) -> Option<String> {
    match (min, max) {
        (Some(lo), Some(hi)) => Some(format!("Must be between {lo} and {hi}")),
        (Some(lo), None) => Some(format!("Must be ≥ {lo}")),
        (None, Some(hi)) => Some(format!("Must be ≤ {hi}")),
        (None, None) => None,
    }
}

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let mut q = CustomType::<u64>::new(title)
            .with_default(default)
            .with_help_message(help);

        if let Some(msg) = range_message(min, max) {
            let lo = min.unwrap_or(u64::MIN);
            let hi = max.unwrap_or(u64::MAX);
            q = q.with_validator(move |x: &u64| {
                if (lo..=hi).contains(x) {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(msg.clone().into()))
                }
            });
        }

        Ok(q.prompt()?)
    }

    fn select(&self, title: &str, help: Option<&str>, options: &[String]) -> Result<usize> {
        let mut select = Select::new(title, options.to_vec());
        if let Some(help) = help {
            select = select.with_help_message(help);
        }
        Ok(select.raw_prompt()?.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_messages() {
        assert_eq!(
            range_message(Some(1), Some(200)).as_deref(),
            Some("Must be between 1 and 200")
        );
        assert_eq!(range_message(Some(1), None).as_deref(), Some("Must be ≥ 1"));
        assert_eq!(range_message(None, Some(9)).as_deref(), Some("Must be ≤ 9"));
        assert_eq!(range_message(None, None), None);
    }
}
