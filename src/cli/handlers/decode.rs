use crate::cli::{
    args::DecodeArgs,
    global::GlobalArgs,
    input::{read_input, resolve_format},
};
use base32_codec::{CodecConfig, CodecError};
use std::fs;
use std::io::{self, Write};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &CodecConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = resolve_format(args.format.as_deref(), config)?;
    let input = read_input(args.file.as_ref(), global, config)?;

    let trimmed = input.trim_ascii();
    let leading = input.len() - input.trim_ascii_start().len();
    let data = base32_codec::decode(trimmed, format).map_err(|err| shift_position(err, leading))?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &data)?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&data)?;
        stdout.flush()?;
    }

    Ok(())
}

/// Re-bases an illegal character position onto the untrimmed input.
fn shift_position(err: CodecError, leading: usize) -> CodecError {
    match err {
        CodecError::IllegalCharacter { byte, position } => CodecError::IllegalCharacter {
            byte,
            position: position + leading,
        },
        other => other,
    }
}
