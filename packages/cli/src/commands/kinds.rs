use anyhow::Result;
use clap::Args;
use colored::Colorize;
use linkpage_editor::field_names;
use linkpage_icons::BuiltinIcons;
use linkpage_model::BlockKind;

#[derive(Debug, Args)]
pub struct KindsArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// One row of the kind listing
#[derive(Debug, serde::Serialize)]
struct KindInfo {
    kind: &'static str,
    label: &'static str,
    fields: Vec<&'static str>,
}

fn kind_infos() -> Vec<KindInfo> {
    BlockKind::ALL
        .iter()
        .map(|kind| KindInfo {
            kind: kind.as_str(),
            label: kind.label(),
            fields: field_names(*kind, &BuiltinIcons),
        })
        .collect()
}

pub fn kinds(args: KindsArgs, _cwd: &str) -> Result<()> {
    let infos = kind_infos();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!("{}", "Block kinds".bright_blue().bold());
    for info in infos {
        println!(
            "  {:<11} {:<16} {}",
            info.kind.green(),
            info.label,
            info.fields.join(", ").dimmed()
        );
    }

    Ok(())
}
