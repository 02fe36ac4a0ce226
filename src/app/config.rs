use serde::{Deserialize, Serialize};

/// Raw text of the four entry fields, persisted between runs.
#[derive(Serialize, Deserialize, Default)]
pub struct Config {
    pub principal: String,
    pub rate: String,
    pub compounds: String,
    pub years: String,
}
