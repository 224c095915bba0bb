use crate::cli::{args::BatchArgs, global::GlobalArgs, input::read_input};
use base32_codec::{
    CodecConfig, CodecError,
    value::{decode_value, encode_value},
};
use serde::Deserialize;
use serde_json::{Map, Value, json};

/// One entry of the batch input array.
#[derive(Debug, Deserialize)]
struct BatchRequest {
    op: String,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    format: Option<Value>,
}

pub fn handle(
    args: BatchArgs,
    global: &GlobalArgs,
    config: &CodecConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref(), global, config)?;
    let requests: Vec<BatchRequest> = serde_json::from_slice(&input)
        .map_err(|e| format!("Invalid batch input (expected a JSON array of requests): {}", e))?;

    let results: Vec<Value> = requests.iter().map(run_request).collect();

    let output = if args.compact {
        serde_json::to_string(&results)?
    } else {
        serde_json::to_string_pretty(&results)?
    };
    println!("{}", output);

    Ok(())
}

fn run_request(request: &BatchRequest) -> Value {
    match request.op.as_str() {
        "encode" => match encode_value(&request.data, request.format.as_ref()) {
            Ok(encoded) => json!({ "ok": true, "output": encoded }),
            Err(e) => codec_failure(&e),
        },
        "decode" => match decode_value(&request.data, request.format.as_ref()) {
            Ok(bytes) => json!({ "ok": true, "output": decoded_output(bytes) }),
            Err(e) => codec_failure(&e),
        },
        other => failure(
            "invalid_option",
            format!("unknown op '{}' (expected 'encode' or 'decode')", other),
        ),
    }
}

/// Decoded bytes as hex, plus the text when the bytes are UTF-8.
fn decoded_output(bytes: Vec<u8>) -> Value {
    let mut output = Map::new();
    output.insert("hex".to_string(), Value::String(hex::encode(&bytes)));
    if let Ok(text) = String::from_utf8(bytes) {
        output.insert("text".to_string(), Value::String(text));
    }
    Value::Object(output)
}

fn codec_failure(error: &CodecError) -> Value {
    failure(error.kind(), error.message())
}

fn failure(kind: &str, message: String) -> Value {
    json!({ "ok": false, "error": { "kind": kind, "message": message } })
}
