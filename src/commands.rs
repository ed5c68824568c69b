//! Command implementations for the specwise CLI

use colored::Colorize;
use std::path::PathBuf;

use specwise::catalog::{Importance, NOT_SPECIFIED};
use specwise::error::{Result, SpecwiseError};
use specwise::session::ComparisonSession;
use specwise::{export, ingest, store};

/// Start a fresh session for a product-type/use-case pair
pub fn cmd_research(product_type: &str, use_case: &str) -> Result<()> {
    let session = ComparisonSession::new(product_type, use_case)?;

    println!(
        "\nSpecification framework for '{}'{}:\n",
        session.product_type.bold(),
        if use_case.is_empty() {
            String::new()
        } else {
            format!(" ({})", use_case)
        }
    );

    for (category, attrs) in session.catalog.by_category() {
        println!("  {}", category.bold());
        for attr in attrs {
            println!(
                "    {:<28} {}  [{}]",
                attr.name,
                importance_badge(attr.importance),
                attr.id.dimmed()
            );
        }
        println!();
    }

    store::save(&session)?;
    println!(
        "{} attributes resolved. Next: specwise analyze <files>... or specwise add",
        session.catalog.len()
    );
    Ok(())
}

/// Extract products from documents, then score the whole comparison
pub fn cmd_analyze(files: &[PathBuf]) -> Result<()> {
    let mut session = load_session()?;

    let report = ingest::ingest_paths(&mut session, files);
    for failure in &report.failures {
        eprintln!(
            "{} {}: {}",
            "skipped".yellow(),
            failure.source_name,
            failure.reason()
        );
    }

    if report.loaded == 0 && session.records.is_empty() {
        return Err(SpecwiseError::EmptyInput);
    }

    session.analyze();
    store::save(&session)?;

    println!(
        "\nProcessed {} document(s), {} failed.\n",
        report.loaded,
        report.failures.len()
    );
    print_comparison(&session);
    Ok(())
}

/// Add a manually entered product and re-score
pub fn cmd_add(brand: &str, specs: &[String]) -> Result<()> {
    let pairs = parse_spec_pairs(specs)?;

    let mut session = load_session()?;
    session.add_manual(brand, &pairs)?;
    session.analyze();
    store::save(&session)?;

    println!("\n{} added to comparison.\n", brand.bold());
    print_comparison(&session);
    Ok(())
}

pub fn cmd_show() -> Result<()> {
    let session = load_session()?;
    println!(
        "\n{} comparison{}\n",
        session.product_type.bold(),
        if session.use_case.is_empty() {
            String::new()
        } else {
            format!(" for {}", session.use_case)
        }
    );
    print_comparison(&session);
    Ok(())
}

pub fn cmd_recommend() -> Result<()> {
    let session = load_session()?;
    let recommendation = session.recommend()?;
    let best = session.best().ok_or(SpecwiseError::EmptyInput)?;

    println!("\n{}", "Recommendation".bold());
    println!(
        "  Best choice: {} (score {}/100)\n",
        best.brand.green().bold(),
        best.score_value()
    );
    println!("  {}\n", recommendation.reasoning);

    println!("{}", "Insights".bold());
    println!("  {}\n", recommendation.insights);

    println!("{}", "Key considerations".bold());
    for consideration in &recommendation.considerations {
        println!("  - {}", consideration);
    }

    println!("\n{}", "Next steps".bold());
    println!("  {}", recommendation.next_steps);
    Ok(())
}

pub fn cmd_export(output: Option<PathBuf>, tsv: bool) -> Result<()> {
    let session = load_session()?;
    let sep = if tsv { '\t' } else { ',' };
    let text = export::to_delimited(&session, sep);

    match output {
        Some(path) => {
            std::fs::write(&path, text)?;
            println!("Exported {} product(s) to {}", session.records.len(), path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

pub fn cmd_reset() -> Result<()> {
    store::clear()?;
    println!("Session cleared.");
    Ok(())
}

fn load_session() -> Result<ComparisonSession> {
    store::load().ok_or_else(|| {
        SpecwiseError::NoSession("no stored session found".to_string())
    })
}

/// Parse "id=value" command-line pairs
fn parse_spec_pairs(specs: &[String]) -> Result<Vec<(String, String)>> {
    specs
        .iter()
        .map(|spec| {
            spec.split_once('=')
                .map(|(id, value)| (id.trim().to_string(), value.trim().to_string()))
                .filter(|(id, _)| !id.is_empty())
                .ok_or_else(|| SpecwiseError::InvalidSpecPair(spec.clone()))
        })
        .collect()
}

fn importance_badge(importance: Importance) -> colored::ColoredString {
    match importance {
        Importance::High => "high".red(),
        Importance::Medium => "medium".yellow(),
        Importance::Low => "low".dimmed(),
    }
}

/// Render the comparison table: one row per display attribute, one column
/// per product, scores at the bottom. The best product is marked.
fn print_comparison(session: &ComparisonSession) {
    if session.records.is_empty() {
        println!("No products yet. Run `specwise analyze <files>...` or `specwise add`.");
        return;
    }

    // First maximal score wins, matching the recommendation tie-break
    let best_index = session
        .records
        .iter()
        .enumerate()
        .fold(0, |best, (i, record)| {
            if record.score_value() > session.records[best].score_value() {
                i
            } else {
                best
            }
        });

    let name_width = session
        .catalog
        .display_attributes()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(0)
        .max("Specification".len());

    // Per-product column width: widest of brand (plus best marker) and values
    let col_widths: Vec<usize> = session
        .records
        .iter()
        .map(|record| {
            session
                .catalog
                .display_attributes()
                .map(|a| {
                    record
                        .specifications
                        .get(&a.id)
                        .map(|v| v.len())
                        .unwrap_or(NOT_SPECIFIED.len())
                })
                .max()
                .unwrap_or(0)
                .max(record.brand.len() + 2)
        })
        .collect();

    // Pad plain text first, color afterwards: ANSI codes break format widths
    let pad = |text: &str, width: usize| format!("{:<width$}", text, width = width);

    print!("{}", pad("Specification", name_width).bold());
    for (i, record) in session.records.iter().enumerate() {
        let marker = if i == best_index { "* " } else { "  " };
        let cell = pad(&format!("{}{}", marker, record.brand), col_widths[i]);
        print!("  {}", cell.bold());
    }
    println!();

    for attr in session.catalog.display_attributes() {
        print!("{}", pad(&attr.name, name_width));
        for (i, record) in session.records.iter().enumerate() {
            let value = record
                .specifications
                .get(&attr.id)
                .cloned()
                .unwrap_or_else(|| NOT_SPECIFIED.to_string());
            let cell = pad(&value, col_widths[i]);
            if value == NOT_SPECIFIED {
                print!("  {}", cell.dimmed());
            } else {
                print!("  {}", cell);
            }
        }
        println!();
    }

    print!("{}", pad("Score", name_width).bold());
    for (i, record) in session.records.iter().enumerate() {
        let cell = pad(&format!("{}/100", record.score_value()), col_widths[i]);
        if i == best_index {
            print!("  {}", cell.green().bold());
        } else {
            print!("  {}", cell);
        }
    }
    println!();
}
