use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use client_core::{
    group_sections, load_settings,
    view_model::{render_plain, ExpansionState},
    LoadController, NamePolicy,
};
use shared::{domain::GroupId, protocol::RecordPayload};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Fetch the item list once and print it grouped by list id")]
struct Args {
    /// Records endpoint; overrides item_list.toml and APP__ENDPOINT_URL.
    #[arg(long)]
    endpoint: Option<String>,
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// sort-last, skip or abort.
    #[arg(long)]
    name_policy: Option<NamePolicy>,
    /// Show the rows of this list id. Repeatable.
    #[arg(long = "expand", value_name = "GROUP_ID")]
    expand: Vec<i64>,
    #[arg(long)]
    expand_all: bool,
    /// Print the ordered records as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let settings =
        load_settings().with_overrides(args.endpoint, args.timeout_secs, args.name_policy);
    tracing::debug!(?settings, "resolved settings");

    let controller = Arc::new(LoadController::from_settings(&settings)?);
    let mut expansion = ExpansionState::default();
    for group_id in &args.expand {
        expansion.expand(GroupId(*group_id));
    }

    let load = controller.start();
    if !args.json {
        print!("{}", render_plain(&controller.snapshot(), &[], &expansion));
    }
    load.await?;

    let state = controller.snapshot();
    if args.json {
        let payload: Vec<RecordPayload> = state.records.iter().map(RecordPayload::from).collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let sections = group_sections(&state.records);
    if args.expand_all {
        expansion.expand_all(&sections);
    }
    print!("{}", render_plain(&state, &sections, &expansion));

    Ok(())
}
