//! Reusable report runner shared by the `binning_report` binary.

use std::error::Error;
use std::path::PathBuf;

use clap::{error::ErrorKind, Parser};
use tracing::info;

use crate::constants::dataset::{MEMBERS_COLUMN, PREVIEW_ROWS};
use crate::export::export_labeled_path;
use crate::fixed::ThresholdScheme;
use crate::metrics::group_balance;
use crate::plot::render_histogram_png;
use crate::quantile::QuantileThresholds;
use crate::source::CsvCatalogSource;
use crate::summary::{fixed_frequencies, preview, quantile_report, quartile_frequencies};

#[derive(Debug, Parser)]
#[command(
    name = "binning_report",
    disable_help_subcommand = true,
    about = "Popularity binning report for a catalog CSV",
    long_about = "Load a catalog CSV, bin the 'members' column with the adaptive quartile \
scheme and the fixed marketing scheme, and report the class balance of both. \
Optionally export the labeled dataset or render a stacked histogram figure."
)]
struct BinningReportCli {
    #[arg(value_name = "CSV", help = "Path to the delimited catalog file")]
    input: PathBuf,
    #[arg(
        long,
        value_name = "PATH",
        help = "Write original columns plus the fixed-scheme label column"
    )]
    export: Option<PathBuf>,
    #[arg(
        long,
        value_name = "PNG",
        help = "Render the stacked histogram figure (requires the 'plots' feature)"
    )]
    plot: Option<PathBuf>,
    #[arg(
        long,
        default_value_t = PREVIEW_ROWS,
        value_parser = parse_positive_usize,
        help = "Rows shown in the (members, group) preview"
    )]
    preview: usize,
    #[arg(
        long = "members-column",
        default_value = MEMBERS_COLUMN,
        help = "Numeric column to bin"
    )]
    members_column: String,
}

/// Run the full report pipeline: load, bin both schemes, print, export, plot.
pub fn run_binning_report<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<BinningReportCli, _>(
        std::iter::once("binning_report".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let dataset = CsvCatalogSource::new()
        .with_members_column(cli.members_column)
        .load_path(&cli.input)?;
    info!(records = dataset.len(), "catalog loaded");

    let thresholds = QuantileThresholds::from_values(dataset.members())?;
    let quartiles = thresholds.label_all(dataset.members());
    let scheme = ThresholdScheme::marketing_default();
    let fixed = scheme.assign_all(dataset.members());

    println!("{}", quantile_report(&thresholds));
    println!("{}", preview(&dataset, &quartiles, cli.preview));

    let quartile_table = quartile_frequencies(&quartiles);
    let fixed_table = fixed_frequencies(&scheme, &fixed);
    println!("{}", quartile_table.render("quartile group counts"));
    println!("{}", fixed_table.render("marketing group counts"));

    for (title, table) in [
        ("quartile", &quartile_table),
        ("marketing", &fixed_table),
    ] {
        if let Some(balance) = group_balance(table) {
            println!(
                "{title} balance: largest group holds {:.1}% of records (max/min ratio {:.2})",
                balance.max_share * 100.0,
                balance.ratio
            );
        }
    }

    if let Some(path) = cli.export {
        export_labeled_path(&path, &dataset, &scheme, &fixed)?;
        println!("exported labeled catalog to {}", path.display());
    }

    if let Some(path) = cli.plot {
        render_histogram_png(&path, dataset.members(), &quartiles, &scheme, &fixed)?;
        println!("rendered histogram figure to {}", path.display());
    }

    Ok(())
}

fn parse_positive_usize(raw: &str) -> Result<usize, String> {
    let parsed = raw
        .parse::<usize>()
        .map_err(|_| format!("could not parse '{raw}' as a positive integer"))?;
    if parsed == 0 {
        return Err("--preview must be greater than zero".to_string());
    }
    Ok(parsed)
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_parser_rejects_zero_and_garbage() {
        assert!(parse_positive_usize("10").is_ok());
        assert!(parse_positive_usize("0").is_err());
        assert!(parse_positive_usize("abc").is_err());
    }

    #[test]
    fn cli_parses_minimal_invocation() {
        let cli = BinningReportCli::try_parse_from(["binning_report", "catalog.csv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("catalog.csv"));
        assert_eq!(cli.preview, PREVIEW_ROWS);
        assert_eq!(cli.members_column, MEMBERS_COLUMN);
        assert!(cli.export.is_none());
        assert!(cli.plot.is_none());
    }
}
