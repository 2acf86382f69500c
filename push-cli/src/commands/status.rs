//! Dispatch status commands.

use clap::Subcommand;
use console::style;

use push_core::config::AppConfig;
use push_core::error::PushResult;
use push_models::{Transfer, TransferStatus};

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum StatusAction {
    /// Look up a dispatch by its transfer id.
    Transfer {
        /// Server-assigned transfer id.
        transfer_id: i64,
    },
    /// Look up a dispatch by group id and client transfer id.
    Client {
        /// Group id.
        group_id: i64,
        /// Client transfer id given when sending.
        client_transfer_id: i64,
    },
}

pub async fn run(config: &AppConfig, action: StatusAction, format: OutputFormat) -> PushResult<()> {
    let api = super::create_api_client(config)?;

    let transfer = match action {
        StatusAction::Transfer { transfer_id } => api.get_status_by_transfer_id(transfer_id).await?,
        StatusAction::Client { group_id, client_transfer_id } => {
            api.get_status_by_client_transfer_id(group_id, client_transfer_id)
                .await?
        }
    };

    match format {
        OutputFormat::Json => super::print_json(&transfer)?,
        OutputFormat::Text => print_transfer(&transfer),
    }
    Ok(())
}

fn print_transfer(transfer: &Transfer) {
    let status = match transfer.status {
        TransferStatus::Sent => style(transfer.status.as_str()).green(),
        TransferStatus::Failed => style(transfer.status.as_str()).red(),
        _ => style(transfer.status.as_str()).yellow(),
    };

    println!("Transfer {} ({status})", style(transfer.id).bold());
    println!("  group:   {}", transfer.group_id);
    println!("  tag:     {}", transfer.tag);
    match transfer.created_at() {
        Some(created) => println!("  created: {}", created.format("%Y-%m-%d %H:%M:%S")),
        None => println!("  created: {}", transfer.creation_date),
    }
    if let Some(client_id) = transfer.client_transfer_id {
        println!("  client transfer id: {client_id}");
    }
    for error in &transfer.errors {
        println!("  {} {error}", style("error:").red());
    }
}
