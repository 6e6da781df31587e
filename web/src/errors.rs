#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Seed element '{0}' not found")]
    MissingSeed(String),
    #[error("Seed element '{0}' is empty")]
    EmptySeed(String),
    #[error("Malformed seed: {0}")]
    MalformedSeed(#[from] serde_json::Error),
}
