use crate::cli::{args::ConfigArgs, global::GlobalArgs};
use base32_codec::{CodecConfig, Format};
use serde::Serialize;

/// Effective configuration after all overrides and command line flags.
#[derive(Debug, Serialize)]
struct ConfigReport {
    formats: Vec<&'static str>,
    user_config: Option<String>,
    settings: EffectiveSettings,
}

#[derive(Debug, Serialize)]
struct EffectiveSettings {
    default_format: Format,
    max_size: usize,
}

pub fn handle(
    args: ConfigArgs,
    global: &GlobalArgs,
    config: &CodecConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = ConfigReport {
        formats: Format::ALL.iter().map(|format| format.name()).collect(),
        user_config: CodecConfig::user_config_path().map(|path| path.display().to_string()),
        settings: EffectiveSettings {
            default_format: config.default_format(),
            max_size: global.effective_max_size(config),
        },
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", toml::to_string(&report)?);
    }

    Ok(())
}
