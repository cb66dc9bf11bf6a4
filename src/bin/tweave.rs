use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "tweave", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one code artifact from a preset config JSON.
    Generate(GenerateArgs),
    /// Validate a preset config JSON and print its normalized form.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input preset config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Preset display name; the code identifier is derived from it.
    #[arg(long, default_value = "preset")]
    name: String,

    /// Artifact to emit.
    #[arg(long, value_enum, default_value_t = FormatChoice::Full)]
    format: FormatChoice,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input preset config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Full,
    Timeline,
    Imports,
    Min,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn read_config(path: &PathBuf) -> anyhow::Result<tweave::GsapPresetConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read preset config '{}'", path.display()))?;
    Ok(tweave::GsapPresetConfig::from_json(&s)?)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let config = read_config(&args.in_path)?;
    let set = tweave::generate(&config, &args.name)?;

    let artifact = match args.format {
        FormatChoice::Full => set.full,
        FormatChoice::Timeline => set.timeline_only,
        FormatChoice::Imports => set.imports_only,
        FormatChoice::Min => set.minified,
        FormatChoice::Json => set.config_json,
    };

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, artifact)
                .with_context(|| format!("write artifact '{}'", out.display()))?;
        }
        None => print!("{artifact}"),
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let config = read_config(&args.in_path)?;
    let normalized = tweave::normalize(&config);
    normalized.validate()?;
    println!("{}", tweave::emit_config_json(&normalized)?);
    Ok(())
}
