use anyhow::{anyhow, Result};
use std::{
    fs,
    io::{self, Read},
    path::Path,
};

/// Resolves an argument that is either inline text, a path to a `.json`
/// file, or `-` for stdin.
pub fn load_text(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read from stdin: {}", e))?;
        Ok(buffer)
    } else if source.ends_with(".json") {
        read_file(Path::new(source))
    } else {
        Ok(source.to_string())
    }
}

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| anyhow!("Failed to read file {}: {}", path.display(), e))
}
