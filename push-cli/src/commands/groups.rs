//! Push group commands.

use clap::Subcommand;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use console::style;

use push_core::config::AppConfig;
use push_core::error::PushResult;
use push_models::Group;

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum GroupsAction {
    /// List the groups of an application.
    List {
        /// Application id.
        #[arg(long)]
        app_id: i64,
    },
    /// Show a single group.
    Get {
        /// Group id.
        id: i64,
    },
    /// Create a group.
    Create {
        /// Application id.
        #[arg(long)]
        app_id: i64,
        /// Group name, unique within the application.
        #[arg(long)]
        name: String,
        /// Pushes per second (100 to 5000).
        #[arg(long)]
        send_rate: Option<u32>,
    },
    /// Rename a group or change its send rate.
    Update {
        /// Group id.
        id: i64,
        /// New group name.
        #[arg(long)]
        name: String,
        /// Pushes per second (100 to 5000).
        #[arg(long)]
        send_rate: Option<u32>,
    },
    /// Archive a group.
    Archive {
        /// Group id.
        id: i64,
    },
    /// Restore an archived group.
    Restore {
        /// Group id.
        id: i64,
    },
}

pub async fn run(config: &AppConfig, action: GroupsAction, format: OutputFormat) -> PushResult<()> {
    let api = super::create_api_client(config)?;

    match action {
        GroupsAction::List { app_id } => {
            let groups = api.get_groups(app_id).await?;
            match format {
                OutputFormat::Json => super::print_json(&groups)?,
                OutputFormat::Text => print_group_table(&groups),
            }
        }
        GroupsAction::Get { id } => {
            let group = api.get_group(id).await?;
            print_group(&group, format)?;
        }
        GroupsAction::Create { app_id, name, send_rate } => {
            let mut request = Group::create_request(app_id, name);
            request.send_rate = send_rate;
            let group = api.create_group(&request).await?;
            print_group(&group, format)?;
        }
        GroupsAction::Update { id, name, send_rate } => {
            let mut request = Group::update_request(name);
            request.send_rate = send_rate;
            let group = api.update_group(id, &request).await?;
            print_group(&group, format)?;
        }
        GroupsAction::Archive { id } => {
            api.archive_group(id).await?;
            print_done("archived", id, format)?;
        }
        GroupsAction::Restore { id } => {
            api.restore_group(id).await?;
            print_done("restored", id, format)?;
        }
    }

    Ok(())
}

fn print_group(group: &Group, format: OutputFormat) -> PushResult<()> {
    match format {
        OutputFormat::Json => super::print_json(group)?,
        OutputFormat::Text => {
            println!("{}", style(&group.name).bold());
            println!("  id:        {}", display_id(group.id));
            println!("  app id:    {}", display_id(group.app_id));
            println!("  send rate: {}/s", group.effective_send_rate());
        }
    }
    Ok(())
}

fn print_group_table(groups: &[Group]) {
    if groups.is_empty() {
        println!("No groups found.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "Send rate"]);

    for group in groups {
        table.add_row(vec![
            display_id(group.id),
            group.name.clone(),
            group.effective_send_rate().to_string(),
        ]);
    }

    println!("{table}");
    println!("{}", style(format!("{} group(s)", groups.len())).dim());
}

fn print_done(verb: &str, id: i64, format: OutputFormat) -> PushResult<()> {
    match format {
        OutputFormat::Json => super::print_json(&serde_json::json!({ "id": id, "status": verb })),
        OutputFormat::Text => {
            println!("{} group {id} {verb}", style("ok").green());
            Ok(())
        }
    }
}

fn display_id(id: Option<i64>) -> String {
    id.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}
