//! Command-line interface
//!
//! Without a subcommand the terminal UI runs; the subcommands print to
//! stdout and exit.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::catalog::{Catalog, load_catalog};
use crate::config::Config;
use crate::error::CarfinderError;
use crate::garage::{
    Garage, GarageSort, JsonFileStore, MAX_COMPARE, MemoryStore, SavedItem, default_garage_path,
};
use crate::payment::{PaymentInput, calculate_payment, format_money};
use crate::search::search_render::{DropdownRow, dropdown_rows};
use crate::suggest::{Suggestion, SuggestionEngine, format_price};

#[derive(Debug, Parser)]
#[command(name = "carfinder", version, about = "Search cars, reviews and videos from the terminal")]
pub struct Cli {
    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(long, value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Config file (defaults to ~/.config/carfinder/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print suggestions for a query
    Suggest {
        /// Query words; empty prints the popular searches
        query: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Inspect or edit the saved garage
    Garage {
        #[command(subcommand)]
        action: GarageCommand,
    },

    /// Estimate a monthly car payment
    Payment(PaymentArgs),
}

#[derive(Debug, Subcommand)]
pub enum GarageCommand {
    /// List saved items
    List {
        #[arg(long, value_enum, default_value_t = SortArg::Newest)]
        sort: SortArg,

        /// Only items whose title fuzzy-matches every word of this query
        #[arg(long, value_name = "QUERY")]
        filter: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show saved items side by side
    Compare {
        /// Ids of saved items, at most three are compared
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Remove a saved item by id
    Remove { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Newest,
    Price,
    Name,
}

impl From<SortArg> for GarageSort {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Newest => GarageSort::Newest,
            SortArg::Price => GarageSort::Price,
            SortArg::Name => GarageSort::Name,
        }
    }
}

#[derive(Debug, Args)]
pub struct PaymentArgs {
    /// Vehicle price in dollars
    #[arg(long)]
    pub price: f64,

    #[arg(long = "down", default_value_t = 0.0)]
    pub down_payment: f64,

    #[arg(long, default_value_t = 0.0)]
    pub trade_in: f64,

    /// Annual percentage rate
    #[arg(long, default_value_t = 0.0)]
    pub apr: f64,

    /// Loan term in months
    #[arg(long, default_value_t = crate::payment::DEFAULT_TERM_MONTHS)]
    pub term: u32,

    /// Sales tax percentage
    #[arg(long, default_value_t = 0.0)]
    pub tax: f64,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl From<&PaymentArgs> for PaymentInput {
    fn from(args: &PaymentArgs) -> Self {
        PaymentInput {
            price: args.price,
            down_payment: args.down_payment,
            trade_in: args.trade_in,
            apr_percent: args.apr,
            term_months: args.term,
            sales_tax_percent: args.tax,
        }
    }
}

/// Suggestion engine over `--catalog`, the configured catalog, or the built-in one
pub fn build_engine(
    catalog_override: Option<&Path>,
    config: &Config,
) -> Result<Arc<SuggestionEngine>, CarfinderError> {
    let catalog = match catalog_override.or(config.catalog.path.as_deref()) {
        Some(path) => load_catalog(path)?,
        None => Catalog::builtin()?,
    };
    Ok(Arc::new(SuggestionEngine::new(
        Arc::new(catalog),
        config.search.limits(),
    )))
}

/// Garage backed by the configured file, or memory when there is no data dir
pub fn open_garage(config: &Config) -> Garage {
    match config.garage.path.clone().or_else(default_garage_path) {
        Some(path) => {
            log::debug!("Garage file: {}", path.display());
            Garage::new(Box::new(JsonFileStore::<Vec<SavedItem>>::open(path)))
        }
        None => {
            log::warn!("No data directory; garage will not be saved");
            Garage::new(Box::new(MemoryStore::<Vec<SavedItem>>::default()))
        }
    }
}

/// Run a subcommand, writing its output to `out`
pub fn run_command(
    command: &Command,
    catalog_override: Option<&Path>,
    config: &Config,
    out: &mut impl Write,
) -> Result<(), CarfinderError> {
    match command {
        Command::Suggest { query, json } => {
            let engine = build_engine(catalog_override, config)?;
            let suggestions = engine.compute(&query.join(" "));
            if *json {
                serde_json::to_writer_pretty(&mut *out, &suggestions)
                    .map_err(std::io::Error::from)?;
                writeln!(out)?;
            } else {
                write_suggestions(&suggestions, out)?;
            }
        }
        Command::Garage { action } => {
            let mut garage = open_garage(config);
            run_garage(action, &mut garage, out)?;
        }
        Command::Payment(args) => {
            let breakdown = calculate_payment(&PaymentInput::from(args))?;
            if args.json {
                serde_json::to_writer_pretty(&mut *out, &breakdown)
                    .map_err(std::io::Error::from)?;
                writeln!(out)?;
            } else {
                writeln!(out, "Amount financed:  {}", format_money(breakdown.amount_financed))?;
                writeln!(out, "Monthly payment:  {}", format_money(breakdown.monthly_payment))?;
                writeln!(out, "Total interest:   {}", format_money(breakdown.total_interest))?;
                writeln!(out, "Total cost:       {}", format_money(breakdown.total_cost))?;
            }
        }
    }
    Ok(())
}

pub fn run_garage(
    action: &GarageCommand,
    garage: &mut Garage,
    out: &mut impl Write,
) -> Result<(), CarfinderError> {
    match action {
        GarageCommand::List { sort, filter, json } => {
            let mut items = garage.sorted((*sort).into());
            if let Some(query) = filter {
                let matching: HashSet<String> =
                    garage.filter(query).into_iter().map(|item| item.id).collect();
                items.retain(|item| matching.contains(&item.id));
            }
            if *json {
                serde_json::to_writer_pretty(&mut *out, &items).map_err(std::io::Error::from)?;
                writeln!(out)?;
            } else if items.is_empty() {
                writeln!(out, "No saved items")?;
            } else {
                for item in &items {
                    let price = item.price.map(format_price).unwrap_or_default();
                    writeln!(
                        out,
                        "{:<20} {:<40} {:>10}  {}",
                        item.id,
                        item.title,
                        price,
                        item.saved_at.format("%Y-%m-%d")
                    )?;
                }
            }
        }
        GarageCommand::Compare { ids, json } => {
            if let Some(unknown) = ids.iter().find(|id| !garage.contains(id)) {
                return Err(CarfinderError::UnknownGarageItem(unknown.clone()));
            }
            let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            let items = garage.compare(&ids);
            if *json {
                serde_json::to_writer_pretty(&mut *out, &items).map_err(std::io::Error::from)?;
                writeln!(out)?;
            } else {
                write_comparison(&items, out)?;
            }
            if ids.len() > items.len() && items.len() == MAX_COMPARE {
                log::warn!("Only the first {} items are compared", MAX_COMPARE);
            }
        }
        GarageCommand::Remove { id } => {
            if !garage.remove(id)? {
                return Err(CarfinderError::UnknownGarageItem(id.clone()));
            }
            writeln!(out, "Removed {}", id)?;
        }
    }
    Ok(())
}

/// One column per item, one row per attribute
fn write_comparison(items: &[SavedItem], out: &mut impl Write) -> std::io::Result<()> {
    const LABEL_WIDTH: usize = 8;
    const COLUMN_WIDTH: usize = 28;

    let column = |cell: fn(&SavedItem) -> String| items.iter().map(cell).collect::<Vec<_>>();
    let rows = [
        ("", column(|item| item.title.clone())),
        ("Kind", column(|item| item.kind.label().to_string())),
        ("Year", column(|item| item.year.map(|y| y.to_string()).unwrap_or_default())),
        ("Make", column(|item| item.make.clone().unwrap_or_default())),
        ("Model", column(|item| item.model.clone().unwrap_or_default())),
        ("Price", column(|item| item.price.map(format_price).unwrap_or_default())),
        ("Saved", column(|item| item.saved_at.format("%Y-%m-%d").to_string())),
    ];

    for (label, values) in rows {
        let mut line = format!("{:<LABEL_WIDTH$}", label);
        for value in values {
            let value = if value.chars().count() > COLUMN_WIDTH - 2 {
                value.chars().take(COLUMN_WIDTH - 3).chain(['…']).collect()
            } else {
                value
            };
            line.push_str(&format!("  {:<COLUMN_WIDTH$}", value));
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

/// Text form of a suggestion list, grouped like the dropdown
pub fn write_suggestions(suggestions: &[Suggestion], out: &mut impl Write) -> std::io::Result<()> {
    if suggestions.is_empty() {
        return writeln!(out, "No suggestions");
    }

    for row in dropdown_rows(suggestions) {
        match row {
            DropdownRow::Header(suggestion_type) => writeln!(out, "{}", suggestion_type.group_label())?,
            DropdownRow::Item(index) => {
                let suggestion = &suggestions[index];
                match suggestion.detail() {
                    Some(detail) => writeln!(out, "  {}  ({})", suggestion.text, detail)?,
                    None => writeln!(out, "  {}", suggestion.text)?,
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
