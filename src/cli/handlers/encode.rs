use crate::cli::{
    args::EncodeArgs,
    global::GlobalArgs,
    input::{read_input, resolve_format},
};
use base32_codec::CodecConfig;
use std::fs;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &CodecConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = resolve_format(args.format.as_deref(), config)?;
    let data = read_input(args.file.as_ref(), global, config)?;

    let encoded = base32_codec::encode(&data, format);

    if let Some(output_path) = &args.output {
        fs::write(output_path, encoded.as_bytes())?;
    } else {
        println!("{}", encoded);
    }

    Ok(())
}
