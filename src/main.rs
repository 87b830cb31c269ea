use std::fs::File;

use anyhow::Context;
use clap::Parser;

use minutas::config::{Cli, Command};
use minutas::core::matcher::CatalogIndex;
use minutas::utils::{logger, validation};
use minutas::{
    format_order, write_template, CatalogService, CatalogStore, CsvRowSource, ImportReconciler,
    SqliteStore, WeeklyAggregator, WeeklySchedule,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let store = SqliteStore::open(&cli.db)
        .with_context(|| format!("cannot open database at {}", cli.db.display()))?;

    match cli.command {
        Command::Seed => {
            let inserted = CatalogService::new(&store).seed_if_empty()?;
            println!("Seed done, {} foods inserted", inserted);
        }
        Command::AddFood { name } => {
            let id = CatalogService::new(&store).create_food(&name)?;
            println!("Food created with id {}", id);
        }
        Command::AddCenter { name } => {
            let id = CatalogService::new(&store).create_center(&name)?;
            println!("Center created with id {}", id);
        }
        Command::ExportTemplate { output } => {
            let file = File::create(&output)
                .with_context(|| format!("cannot create {}", output.display()))?;
            write_template(&store, file)?;
            println!("Template written to {}", output.display());
        }
        Command::Import { file, json } => {
            let mut source = CsvRowSource::from_path(&file)
                .with_context(|| format!("cannot read {}", file.display()))?;
            let summary = ImportReconciler::new(&store).reconcile(&mut source)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "Rows processed: {} | imported: {} | menus created: {} | items upserted: {}",
                    summary.rows_processed,
                    summary.rows_imported,
                    summary.menus_created,
                    summary.items_upserted
                );
                if !summary.unknown_foods.is_empty() {
                    println!("Unknown foods ({}):", summary.unknown_foods.len());
                    for name in &summary.unknown_foods {
                        println!("  - {}", name);
                    }
                }
            }
        }
        Command::Assign { center, menu_id } => {
            let center_id = resolve_center(&store, &center)?;
            let position = WeeklySchedule::new(&store).assign(center_id, menu_id)?;
            println!("Menu {} assigned at position {}", menu_id, position);
        }
        Command::Unassign { center, menu_id } => {
            let center_id = resolve_center(&store, &center)?;
            WeeklySchedule::new(&store).unassign(center_id, menu_id)?;
            println!("Menu {} removed from the week", menu_id);
        }
        Command::WeeklyOrder {
            center,
            group_1,
            group_2,
            json,
        } => {
            let center_id = resolve_center(&store, &center)?;
            let headcount_1 = validation::parse_headcount("group_1", &group_1)?;
            let headcount_2 = validation::parse_headcount("group_2", &group_2)?;

            let schedule = WeeklySchedule::new(&store);
            let menu_ids: Vec<i64> = schedule
                .list(center_id)?
                .iter()
                .map(|a| a.menu_id)
                .collect();
            let totals =
                WeeklyAggregator::new(&store).aggregate(&menu_ids, headcount_1, headcount_2)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&totals)?);
            } else if totals.is_empty() {
                println!("No foods found for this center's week");
            } else {
                println!(
                    "{:<34} {:>10} {:>10} {:>14} {:>10}",
                    "Food", "Sum G1", "Sum G2", "Total (g)", "Order"
                );
                for total in &totals {
                    println!(
                        "{:<34} {:>10} {:>10} {:>14} {:>10}",
                        total.food_name,
                        total.sum_grams_g1,
                        total.sum_grams_g2,
                        total.total_general,
                        format_order(&total.food_name, total.total_general)
                    );
                }
            }
        }
    }

    Ok(())
}

fn resolve_center<S: CatalogStore>(store: &S, raw_name: &str) -> anyhow::Result<i64> {
    let index = CatalogIndex::from_entries(
        store
            .list_centers()?
            .into_iter()
            .map(|c| (c.name, c.id)),
    );
    index
        .resolve(raw_name)
        .ok_or_else(|| anyhow::anyhow!("no center named '{}'", raw_name))
}
