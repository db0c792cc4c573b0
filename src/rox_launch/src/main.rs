//! rox_launch CLI

use clap::{Args, Parser, Subcommand};
use rox_launch::{
    args_file::{load_args_file, merge_args},
    config::declare_arguments,
    error::LaunchError,
    package::{parse_share_override, AmentIndex, StaticLocator},
    parse_launch_arg, resolve_launch,
    record::LaunchRecord,
    ResolveOptions,
};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "rox_launch")]
#[command(about = "Resolve the ROX simulation launch into process directives", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve launch arguments and write the directive record
    Resolve {
        #[command(flatten)]
        input: LaunchInput,

        /// Record inactive directives as well
        #[arg(long)]
        all: bool,

        /// Output file path, `-` for stdout (default: record.json)
        #[arg(short, long, default_value = "record.json")]
        output: PathBuf,
    },

    /// Print the shell command of every active directive
    Commands {
        #[command(flatten)]
        input: LaunchInput,
    },

    /// List the declared launch arguments
    ShowArgs,
}

#[derive(Args)]
struct LaunchInput {
    /// Launch arguments (name:=value)
    #[arg(value_parser = parse_cli_arg)]
    args: Vec<(String, String)>,

    /// YAML file with launch arguments; command-line values take precedence
    #[arg(long)]
    args_file: Option<PathBuf>,

    /// Share directory override (package=path), checked before the ament index
    #[arg(long = "share-dir", value_parser = parse_share_override)]
    share_dirs: Vec<(String, PathBuf)>,

    /// Run xacro now and embed the rendered robot description
    #[arg(long)]
    render_description: bool,
}

fn parse_cli_arg(s: &str) -> Result<(String, String), String> {
    parse_launch_arg(s).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Resolve {
            input,
            all,
            output,
        } => resolve_record(&input, all).and_then(|record| write_record(&record, &output)),
        Commands::Commands { input } => resolve_record(&input, false).map(|record| {
            for directive in record.active_directives() {
                println!("{}", directive.shell_line());
            }
        }),
        Commands::ShowArgs => {
            show_args();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn resolve_record(
    input: &LaunchInput,
    include_inactive: bool,
) -> Result<LaunchRecord, LaunchError> {
    let file_args = match &input.args_file {
        Some(path) => {
            log::info!("Loading launch arguments from {}", path.display());
            load_args_file(path)?
        }
        None => HashMap::new(),
    };
    let cli_args: HashMap<String, String> = input.args.iter().cloned().collect();
    let args = merge_args([file_args, cli_args]);

    let mut locator = StaticLocator::with_fallback(AmentIndex::from_env());
    for (package, path) in &input.share_dirs {
        locator.insert(package.clone(), path.clone());
    }

    let options = ResolveOptions {
        render_description: input.render_description,
        include_inactive,
    };
    resolve_launch(&args, &locator, options)
}

fn write_record(record: &LaunchRecord, output: &Path) -> Result<(), LaunchError> {
    let json = record.to_json()?;
    if output.as_os_str() == "-" {
        println!("{}", json);
    } else {
        std::fs::write(output, json)?;
        log::info!("Generated launch record: {}", output.display());
    }

    log::info!(
        "  {} directives ({} active)",
        record.directives.len(),
        record.active_directives().count()
    );
    Ok(())
}

fn show_args() {
    println!("Arguments (pass arguments as '<name>:=<value>'):");
    for arg in declare_arguments() {
        println!();
        println!("    '{}':", arg.name);
        if let Some(description) = &arg.description {
            println!("        {}", description);
        }
        if let Some(choices) = &arg.choices {
            let quoted: Vec<String> = choices.iter().map(|c| format!("'{}'", c)).collect();
            println!("        Valid choices are: [{}]", quoted.join(", "));
        }
        match &arg.default {
            Some(default) => println!("        (default: '{}')", default),
            None => println!("        (required)"),
        }
    }
}
