use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "specwise")]
#[command(author, version, about = "Specification-driven product comparison", long_about = None)]
#[command(after_help = r#"Examples:
  specwise research "elevator" --use-case "10-story office building"
  specwise analyze kone.txt otis-proposal.txt       Extract products from documents
  specwise add --brand KONE capacity=1000 speed=1.5 Enter a product manually
  specwise recommend                                Pick the best product
  specwise export -o comparison.csv                 Export the comparison table

Quick Start:
  1. specwise research "elevator" --use-case "office building"
  2. specwise analyze proposals/*.txt
  3. specwise recommend
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the attribute catalog for a product type and start a session
    #[command(after_help = r#"Examples:
  specwise research "elevator" --use-case "10-story office building"
  specwise research "smartphone"
  specwise research "industrial dishwasher"   # unknown types get a generic catalog

Starting a new research replaces any existing session.
"#)]
    Research {
        /// What product to compare (e.g., "elevator", "smartphone")
        product_type: String,

        /// What the product will be used for
        #[arg(long, default_value = "")]
        use_case: String,
    },

    /// Extract products from text documents and score the comparison
    Analyze {
        /// Document files to process, in order
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Add a product manually and re-score the comparison
    #[command(after_help = r#"Examples:
  specwise add --brand KONE capacity=1000 speed=1.5 stops=12
  specwise add --brand "ACME LIFTS"
"#)]
    Add {
        /// Brand name of the product
        #[arg(long)]
        brand: String,

        /// Specification values as id=value pairs
        #[arg(value_name = "ID=VALUE")]
        specs: Vec<String>,
    },

    /// Show the current comparison table
    Show,

    /// Recommend the best product in the current comparison
    Recommend,

    /// Export the comparison as delimited text
    Export {
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Tab-separated output instead of comma-separated
        #[arg(long)]
        tsv: bool,
    },

    /// Delete the stored session
    Reset,
}
