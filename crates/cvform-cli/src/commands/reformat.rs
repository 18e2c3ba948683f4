//! Reformat command - convert a plain `label: value` report to CSV.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use cvform_core::report::reformat;

/// Arguments for the reformat command.
#[derive(Args)]
pub struct ReformatArgs {
    /// Plain report to convert ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: ReformatArgs) -> anyhow::Result<()> {
    let plain = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        if !args.input.exists() {
            anyhow::bail!("Input file not found: {}", args.input.display());
        }
        fs::read_to_string(&args.input)?
    };

    let csv = reformat(&plain);
    debug!("Reformatted {} lines", csv.lines().count());

    if let Some(output_path) = &args.output {
        fs::write(output_path, &csv)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}
