use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use fmtopts::{
    load_editor_settings, logging, merge_editor_settings, CliEditorOptions, ConfigResolver,
    DiscoveryOptions, EditorSettings, FileDiscovery, FormatRequest, RangeFormattingOptions,
    Resolution, TracingSink,
};

#[derive(Parser)]
#[command(name = "fmtopts")]
#[command(version, about = "Resolve the formatter options for a file")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the effective formatter options for a file as TOML
    Resolve(ResolveArgs),
    /// Print whether a file has a project configuration
    HasConfig {
        /// File to check
        file: PathBuf,
    },
}

#[derive(Args)]
struct ResolveArgs {
    /// File to resolve options for
    file: PathBuf,

    /// Parser the formatter will use (babel, typescript, css, ...)
    #[arg(long)]
    parser: String,

    /// Version of the active formatter
    #[arg(long, value_name = "VERSION", default_value = "2.0.0")]
    formatter_version: String,

    /// TOML file with the editor's formatting settings
    #[arg(long, value_name = "PATH")]
    editor_settings: Option<PathBuf>,

    /// Editor tab width (overrides the settings file)
    #[arg(long, value_name = "N")]
    tab_width: Option<usize>,

    /// Editor print width (overrides the settings file)
    #[arg(long, value_name = "N")]
    print_width: Option<usize>,

    /// Indent with tabs in the editor
    #[arg(long)]
    use_tabs: bool,

    /// Prefer single quotes in the editor
    #[arg(long)]
    single_quote: bool,

    /// Omit semicolons in the editor
    #[arg(long)]
    no_semi: bool,

    /// Use this options file instead of searching for one
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also read .editorconfig
    #[arg(long)]
    editorconfig: bool,

    /// Start offset of a range-format request
    #[arg(long, value_name = "OFFSET", requires = "range_end")]
    range_start: Option<usize>,

    /// End offset of a range-format request
    #[arg(long, value_name = "OFFSET", requires = "range_start")]
    range_end: Option<usize>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    match cli.command {
        Command::Resolve(args) => resolve(args).await,
        Command::HasConfig { file } => has_config(file).await,
    }
}

async fn resolve(args: ResolveArgs) -> ExitCode {
    let editor = match load_editor(&args) {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let discovery = DiscoveryOptions {
        config: args.config.clone(),
        editorconfig: args.editorconfig,
    };
    let range = args
        .range_start
        .zip(args.range_end)
        .map(|(range_start, range_end)| RangeFormattingOptions {
            range_start,
            range_end,
        });

    let resolver = ConfigResolver::new(TracingSink);
    let request = FormatRequest {
        file_path: &args.file,
        parser: &args.parser,
        editor: &editor,
        formatter_version: &args.formatter_version,
        discovery: Some(&discovery),
        range,
    };

    match resolver
        .compute_effective_options(&FileDiscovery, request)
        .await
    {
        Resolution::Resolved(options) => match toml::to_string(&options) {
            Ok(rendered) => {
                print!("{rendered}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: failed to render options: {e}");
                ExitCode::from(1)
            }
        },
        Resolution::Failed(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

async fn has_config(file: PathBuf) -> ExitCode {
    let resolver = ConfigResolver::new(TracingSink);

    match resolver.check_has_config(&FileDiscovery, &file).await {
        Ok(found) => {
            println!("{found}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn load_editor(args: &ResolveArgs) -> Result<EditorSettings, fmtopts::ConfigError> {
    let file = args
        .editor_settings
        .as_deref()
        .map(load_editor_settings)
        .transpose()?;

    Ok(merge_editor_settings(&build_cli_options(args), file.as_ref()))
}

fn build_cli_options(args: &ResolveArgs) -> CliEditorOptions {
    // Boolean flags in clap are always present (default false), so we
    // treat false as "not set" for proper merging with the settings file.
    CliEditorOptions {
        tab_width: args.tab_width,
        print_width: args.print_width,
        use_tabs: args.use_tabs.then_some(true),
        single_quote: args.single_quote.then_some(true),
        semi: args.no_semi.then_some(false),
    }
}
