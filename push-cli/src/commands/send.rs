//! Send-batch command.

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::{info, warn};

use push_core::config::AppConfig;
use push_core::constants::limits;
use push_core::error::{PushError, PushResult};
use push_models::PushBatchRequest;

use crate::OutputFormat;

#[derive(Debug, Args)]
pub struct SendArgs {
    /// JSON file containing a push batch request.
    #[arg(long)]
    pub file: PathBuf,
    /// Client transfer id, overriding the one in the file.
    #[arg(long)]
    pub client_transfer_id: Option<i64>,
}

pub async fn run(config: &AppConfig, args: SendArgs, format: OutputFormat) -> PushResult<()> {
    let mut request = load_request(&args.file)?;
    if let Some(id) = args.client_transfer_id {
        request.client_transfer_id = Some(id);
    }

    let devices = request.device_count();
    if devices > limits::MAX_DEVICES_PER_REQUEST {
        warn!(
            "request targets {devices} devices, the service accepts at most {}",
            limits::MAX_DEVICES_PER_REQUEST
        );
    }

    let api = super::create_api_client(config)?;
    let response = api.send_push(&request).await?;
    info!("dispatch accepted, transfer id {}", response.transfer_id);

    match format {
        OutputFormat::Json => super::print_json(&response)?,
        OutputFormat::Text => {
            println!(
                "{} {} batch(es), {} device(s) sent to group {}",
                style("ok").green(),
                request.batch.len(),
                devices,
                request.group_id
            );
            println!("  transfer id: {}", style(response.transfer_id).bold());
            if let Some(client_id) = response.client_transfer_id {
                println!("  client transfer id: {client_id}");
            }
        }
    }

    Ok(())
}

/// Read and decode a push batch request file.
fn load_request(path: &Path) -> PushResult<PushBatchRequest> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        PushError::Config(format!("invalid push request in {}: {e}", path.display()))
    })
}
