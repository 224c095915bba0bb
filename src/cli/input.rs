use crate::cli::global::GlobalArgs;
use base32_codec::{CodecConfig, Format};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Reads the whole input from `file` or stdin, enforcing the size limit.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
    config: &CodecConfig,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let max_size = global.effective_max_size(config);

    let data = if let Some(file_path) = file {
        // Check file size before reading it
        if max_size > 0 {
            let file_size = usize::try_from(fs::metadata(file_path)?.len()).unwrap_or(usize::MAX);
            check_size(file_size, max_size, global, Some(file_path.as_path()))?;
        }
        fs::read(file_path)?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;

        if max_size > 0 {
            check_size(buffer.len(), max_size, global, None)?;
        }
        buffer
    };

    tracing::debug!(bytes = data.len(), "read input");
    Ok(data)
}

fn check_size(
    size: usize,
    max_size: usize,
    global: &GlobalArgs,
    path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    if size <= max_size {
        return Ok(());
    }

    if global.force {
        if !global.quiet {
            eprintln!(
                "Warning: Processing large input ({} bytes, limit: {} bytes)",
                size, max_size
            );
        }
        return Ok(());
    }

    let source = match path {
        Some(path) => format!("File {:?}", path),
        None => "Input".to_string(),
    };
    Err(format!(
        "{} size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
        source, size, max_size
    )
    .into())
}

/// Resolves `--format`, falling back to the configured default.
pub fn resolve_format(
    format: Option<&str>,
    config: &CodecConfig,
) -> Result<Format, base32_codec::CodecError> {
    match format {
        Some(name) => name.parse(),
        None => Ok(config.default_format()),
    }
}
