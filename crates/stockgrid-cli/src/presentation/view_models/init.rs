use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct InitResultViewModel {
    pub config_path: PathBuf,
    /// False when an existing file was kept
    pub written: bool,
    pub source: String,
    pub inflation_rounds: u32,
}
