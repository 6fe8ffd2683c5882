mod app;
mod search;

pub use app::{AppConfig, AppConfigError};
pub use search::SearchSettings;

#[cfg(test)]
mod tests;
