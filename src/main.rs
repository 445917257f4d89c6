use clap::{Parser, Subcommand};
use nbsite::{config, generate, output, scan};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "nbsite")]
#[command(about = "Static site generator for notebook course sites")]
#[command(long_about = "\
Static site generator for notebook course sites

Your filesystem is the data source. Notebooks under nbs/chapters/ become the
ordered course chapters; notebooks under nbs/other/ become ancillary pages.
Every document gets circular previous/next navigation within its collection.

Content structure:

  nbs/
  ├── chapters/
  │   ├── 01-Introduction.ipynb    # Directory id '01', title \"Introduction\"
  │   └── 03-Linear-Models.ipynb   # Non-contiguous numbering OK
  └── other/
      └── Reading List.ipynb       # No dash: slug id 'reading-list'

  templates/                       # content.html, home.html, chapters.html
  site.toml                        # Optional config (run 'nbsite gen-config')

Cells tagged 'solution' (configurable) are dropped before conversion.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = "site.toml", global = true)]
    config: PathBuf,

    /// Directory for intermediate files (scan manifest)
    #[arg(long, default_value = ".nbsite-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the notebook directories into a manifest
    Scan,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate the content directories without building
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let config = config::load_config(&cli.config)?;
            let manifest = scan::scan(Path::new(&config.nbs_dir))?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest);
        }
        Command::Build => {
            let config = config::load_config(&cli.config)?;

            println!("==> Stage 1: Scanning {}", config.nbs_dir);
            let manifest = scan::scan(Path::new(&config.nbs_dir))?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest);

            println!("==> Stage 2: Generating HTML → {}", config.output_dir);
            generate::generate(&manifest, &config)?;
            output::print_generate_output(&manifest);

            println!("==> Build complete: {}", config.output_dir);
        }
        Command::Check => {
            let config = config::load_config(&cli.config)?;
            println!("==> Checking {}", config.nbs_dir);
            let manifest = scan::scan(Path::new(&config.nbs_dir))?;
            output::print_scan_output(&manifest);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
