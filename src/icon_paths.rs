use std::path::PathBuf;

// Relative to the working directory the tool is launched from
const SOURCE_LOGO: &str = "assets/icons/padelcenterx4transparent.png";
const PADDED_LOGO: &str = "assets/icons/padelcenter_foreground_small.png";

/// Where the logo is read from and where the padded icon is written.
#[derive(Debug, Clone, PartialEq)]
pub struct IconPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for IconPaths {
    fn default() -> Self {
        Self {
            input: PathBuf::from(SOURCE_LOGO),
            output: PathBuf::from(PADDED_LOGO),
        }
    }
}
