//! Tests for cli

use super::*;
use crate::garage::{SavedItem, SavedItemKind};
use crate::suggest::popular_searches;
use tempfile::TempDir;

fn output_of(f: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut out = Vec::new();
    f(&mut out);
    String::from_utf8(out).unwrap()
}

fn memory_garage(items: Vec<SavedItem>) -> Garage {
    Garage::new(Box::new(MemoryStore::new(items)))
}

#[test]
fn test_parse_no_command_runs_tui() {
    let cli = Cli::try_parse_from(["carfinder"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.catalog.is_none());
}

#[test]
fn test_parse_suggest_with_global_flags() {
    let cli = Cli::try_parse_from([
        "carfinder", "suggest", "honda", "civic", "--json", "--catalog", "/tmp/c.json",
    ])
    .unwrap();

    assert_eq!(cli.catalog, Some(PathBuf::from("/tmp/c.json")));
    match cli.command {
        Some(Command::Suggest { query, json }) => {
            assert_eq!(query, vec!["honda", "civic"]);
            assert!(json);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_payment_defaults() {
    let cli = Cli::try_parse_from(["carfinder", "payment", "--price", "30000"]).unwrap();
    let Some(Command::Payment(args)) = cli.command else {
        panic!("expected payment");
    };

    let input = PaymentInput::from(&args);
    assert_eq!(input.price, 30_000.0);
    assert_eq!(input.term_months, 60);
    assert_eq!(input.apr_percent, 0.0);
}

#[test]
fn test_parse_garage_sort() {
    let cli = Cli::try_parse_from(["carfinder", "garage", "list", "--sort", "price"]).unwrap();
    match cli.command {
        Some(Command::Garage {
            action: GarageCommand::List { sort, filter, json },
        }) => {
            assert_eq!(GarageSort::from(sort), GarageSort::Price);
            assert!(filter.is_none());
            assert!(!json);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_payment_requires_price() {
    assert!(Cli::try_parse_from(["carfinder", "payment"]).is_err());
}

#[test]
fn test_write_popular_suggestions() {
    let output = output_of(|out| write_suggestions(&popular_searches(), out).unwrap());
    assert!(output.starts_with("Popular Searches\n"));
    assert!(output.contains("  Best SUVs of 2025\n"));
    assert_eq!(output.lines().count(), 5);
}

#[test]
fn test_write_no_suggestions() {
    let output = output_of(|out| write_suggestions(&[], out).unwrap());
    assert_eq!(output, "No suggestions\n");
}

#[test]
fn test_suggest_command_text() {
    let command = Command::Suggest {
        query: vec!["honda".to_string()],
        json: false,
    };
    let output = output_of(|out| run_command(&command, None, &Config::default(), out).unwrap());

    assert!(output.contains("Ask the Assistant"));
    assert!(output.contains("  2025 Honda Civic Sport  ($27,345)"));
}

#[test]
fn test_suggest_command_json() {
    let command = Command::Suggest {
        query: vec!["electric".to_string()],
        json: true,
    };
    let output = output_of(|out| run_command(&command, None, &Config::default(), out).unwrap());

    let parsed: Vec<Suggestion> = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.len(), 4);
    assert!(output.contains("\"type\": \"aiSuggestion\""));
}

#[test]
fn test_build_engine_prefers_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{"articles": [{"id": "x1", "title": "Zephyr Owners Guide", "imageUrl": "z.jpg", "category": "Guide", "date": "2024-01-01"}]}"#,
    )
    .unwrap();

    let engine = build_engine(Some(&path), &Config::default()).unwrap();
    let suggestions = engine.compute("zephyr");
    assert!(suggestions.iter().any(|s| s.id == "article-x1"));
}

#[test]
fn test_build_engine_missing_catalog() {
    let dir = TempDir::new().unwrap();
    let result = build_engine(Some(&dir.path().join("missing.json")), &Config::default());
    assert!(matches!(result, Err(CarfinderError::Catalog(_))));
}

#[test]
fn test_garage_list_and_remove() {
    let mut item = SavedItem::new("new-n7", "2025 Kia Telluride SX", SavedItemKind::Vehicle);
    item.price = Some(52_000);
    let mut garage = memory_garage(vec![item]);

    let listing = output_of(|out| {
        run_garage(
            &GarageCommand::List {
                sort: SortArg::Name,
                filter: None,
                json: false,
            },
            &mut garage,
            out,
        )
        .unwrap()
    });
    assert!(listing.contains("new-n7"));
    assert!(listing.contains("$52,000"));

    let removed = output_of(|out| {
        run_garage(
            &GarageCommand::Remove {
                id: "new-n7".to_string(),
            },
            &mut garage,
            out,
        )
        .unwrap()
    });
    assert_eq!(removed, "Removed new-n7\n");
    assert!(garage.is_empty());
}

#[test]
fn test_garage_remove_unknown_id() {
    let mut garage = memory_garage(Vec::new());
    let mut out = Vec::new();
    let result = run_garage(
        &GarageCommand::Remove {
            id: "nope".to_string(),
        },
        &mut garage,
        &mut out,
    );
    assert!(matches!(result, Err(CarfinderError::UnknownGarageItem(id)) if id == "nope"));
}

#[test]
fn test_empty_garage_list() {
    let mut garage = memory_garage(Vec::new());
    let output = output_of(|out| {
        run_garage(
            &GarageCommand::List {
                sort: SortArg::Newest,
                filter: None,
                json: false,
            },
            &mut garage,
            out,
        )
        .unwrap()
    });
    assert_eq!(output, "No saved items\n");
}

fn compare_garage() -> Garage {
    let mut civic = SavedItem::new("model-honda/civic", "2025 Honda Civic", SavedItemKind::Vehicle);
    civic.make = Some("honda".to_string());
    civic.model = Some("civic".to_string());
    civic.year = Some(2025);
    civic.price = Some(24_250);
    let mut telluride = SavedItem::new("new-n7", "2025 Kia Telluride SX", SavedItemKind::Vehicle);
    telluride.price = Some(52_000);
    let review = SavedItem::new("article-a1", "2025 Honda Civic Review", SavedItemKind::Review);
    let tacoma = SavedItem::new("used-u3", "2021 Toyota Tacoma", SavedItemKind::Vehicle);
    memory_garage(vec![civic, telluride, review, tacoma])
}

#[test]
fn test_parse_garage_list_filter() {
    let cli = Cli::try_parse_from(["carfinder", "garage", "list", "--filter", "honda civ"]).unwrap();
    match cli.command {
        Some(Command::Garage {
            action: GarageCommand::List { filter, .. },
        }) => assert_eq!(filter.as_deref(), Some("honda civ")),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_garage_list_filter_keeps_sort_order() {
    let mut garage = compare_garage();
    let listing = output_of(|out| {
        run_garage(
            &GarageCommand::List {
                sort: SortArg::Name,
                filter: Some("honda".to_string()),
                json: false,
            },
            &mut garage,
            out,
        )
        .unwrap()
    });
    let ids: Vec<_> = listing
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(ids, vec!["model-honda/civic", "article-a1"]);
}

#[test]
fn test_garage_list_filter_without_matches() {
    let mut garage = compare_garage();
    let output = output_of(|out| {
        run_garage(
            &GarageCommand::List {
                sort: SortArg::Newest,
                filter: Some("ferrari".to_string()),
                json: false,
            },
            &mut garage,
            out,
        )
        .unwrap()
    });
    assert_eq!(output, "No saved items\n");
}

#[test]
fn test_parse_garage_compare_requires_ids() {
    assert!(Cli::try_parse_from(["carfinder", "garage", "compare"]).is_err());

    let cli = Cli::try_parse_from(["carfinder", "garage", "compare", "a", "b"]).unwrap();
    match cli.command {
        Some(Command::Garage {
            action: GarageCommand::Compare { ids, json },
        }) => {
            assert_eq!(ids, vec!["a", "b"]);
            assert!(!json);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_garage_compare_text() {
    let mut garage = compare_garage();
    let output = output_of(|out| {
        run_garage(
            &GarageCommand::Compare {
                ids: vec!["new-n7".to_string(), "model-honda/civic".to_string()],
                json: false,
            },
            &mut garage,
            out,
        )
        .unwrap()
    });

    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 7);
    // Columns follow the order the ids were given in
    let kia = lines[0].find("2025 Kia Telluride SX").unwrap();
    let honda = lines[0].find("2025 Honda Civic").unwrap();
    assert!(kia < honda);
    assert!(lines[4].starts_with("Model") && lines[4].contains("civic"));
    assert!(lines[5].contains("$52,000") && lines[5].contains("$24,250"));
}

#[test]
fn test_garage_compare_json_stops_at_limit() {
    let mut garage = compare_garage();
    let output = output_of(|out| {
        run_garage(
            &GarageCommand::Compare {
                ids: vec![
                    "used-u3".to_string(),
                    "new-n7".to_string(),
                    "used-u3".to_string(),
                    "article-a1".to_string(),
                    "model-honda/civic".to_string(),
                ],
                json: true,
            },
            &mut garage,
            out,
        )
        .unwrap()
    });

    let items: Vec<SavedItem> = serde_json::from_str(&output).unwrap();
    let ids: Vec<_> = items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["used-u3", "new-n7", "article-a1"]);
}

#[test]
fn test_garage_compare_unknown_id() {
    let mut garage = compare_garage();
    let mut out = Vec::new();
    let result = run_garage(
        &GarageCommand::Compare {
            ids: vec!["new-n7".to_string(), "new-n99".to_string()],
            json: false,
        },
        &mut garage,
        &mut out,
    );
    assert!(matches!(result, Err(CarfinderError::UnknownGarageItem(id)) if id == "new-n99"));
    assert!(out.is_empty());
}

#[test]
fn test_payment_command_text() {
    let command = Command::Payment(PaymentArgs {
        price: 25_000.0,
        down_payment: 0.0,
        trade_in: 0.0,
        apr: 6.0,
        term: 60,
        tax: 0.0,
        json: false,
    });
    let output = output_of(|out| run_command(&command, None, &Config::default(), out).unwrap());

    assert!(output.contains("Monthly payment:  $483.32"));
    assert!(output.contains("Amount financed:  $25,000.00"));
}

#[test]
fn test_payment_command_invalid() {
    let command = Command::Payment(PaymentArgs {
        price: 10_000.0,
        down_payment: 0.0,
        trade_in: 0.0,
        apr: 5.0,
        term: 0,
        tax: 0.0,
        json: false,
    });
    let mut out = Vec::new();
    let result = run_command(&command, None, &Config::default(), &mut out);
    assert!(matches!(result, Err(CarfinderError::Payment(_))));
}
