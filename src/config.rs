// src/config.rs

use std::time::Duration;
use url::Url;

/// Kenneth French data library: 12 industry portfolios, CSV flavour.
pub const DEFAULT_URL: &str =
    "https://mba.tuck.dartmouth.edu/pages/faculty/ken.french/ftp/12_Industry_Portfolios_CSV.zip";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Output directory used when the caller does not pass one.
pub const DEFAULT_OUTPUT_DIR: &str = "./results";

/// Runtime knobs for the fetcher.
#[derive(Debug, Clone)]
pub struct Config {
    pub url: Url,
    pub timeout: Duration,
}
