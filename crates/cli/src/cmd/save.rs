use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::Utc;
use color_eyre::eyre::{Result, WrapErr};
use mdcards_core::save::{SaveAck, SaveRequest, save_deck};

use crate::SaveArgs;

/// Read a save request, write it and print the acknowledgement as JSON.
///
/// Malformed input surfaces as an error report; save failures are
/// acknowledged with `success: false` and exit code 1.
pub fn run(config: Option<&Path>, profile: Option<&str>, args: &SaveArgs) -> Result<()> {
    let rc = super::load_config(config, profile, "save");

    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read save request {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).wrap_err("failed to read stdin")?;
            buf
        }
    };
    let request: SaveRequest =
        serde_json::from_str(&raw).wrap_err("save request is not valid JSON")?;

    let ack = match save_deck(&rc.content_dir, Some(rc.meta_file.as_path()), &request, Utc::now()) {
        Ok(ack) => ack,
        Err(e) => {
            tracing::error!("Save failed for '{}': {e}", request.topic_id);
            SaveAck::failure(&e)
        }
    };

    println!("{}", serde_json::to_string_pretty(&ack)?);
    if !ack.success {
        std::process::exit(1);
    }
    Ok(())
}
