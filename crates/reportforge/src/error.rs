#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Crew execution failed: {0}")]
    Crew(String),

    #[error("Mail delivery failed: {0}")]
    Mail(String),
}
