use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use localekit::{
    is_supported, language_display_name, supported_languages, ApiLevel, DefaultLocale,
    LocaleApplier, Settings, CONFIG_FILE,
};

const VERSION: &str = concat!(env!("LOCALEKIT_VERSION"), " ", env!("BUILD_INFO"));

#[derive(Debug, clap::Parser)]
#[command(name = "localekit", version = VERSION)]
#[command(about = "Look up supported languages and apply them to a UI context.", long_about = None)]
struct Cli {
    /// Print debug logs.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List the supported languages.
    List,
    /// Print the display name of a language code.
    #[command(arg_required_else_help = true)]
    Name {
        /// The language code, such as `pt-BR`.
        code: String,
    },
    /// Apply a language code to a fresh context and print the result.
    Apply {
        /// The language code, an empty code keeps the system locale.
        #[arg(default_value = "")]
        code: String,
        /// The host API level, overrides the config file.
        #[arg(long)]
        api_level: Option<u32>,
        /// The config file.
        #[arg(short, long, default_value = CONFIG_FILE)]
        config: PathBuf,
    },
}

fn setup_logger(level: log::LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::List => {
            setup_logger(verbosity(cli.verbose, log::LevelFilter::Warn))?;
            for language in supported_languages() {
                let code = if language.is_system_default() {
                    "(system)"
                } else {
                    language.code
                };
                println!("{code}\t{}", language.name);
            }
        }
        Commands::Name { code } => {
            setup_logger(verbosity(cli.verbose, log::LevelFilter::Warn))?;
            if !is_supported(&code) {
                log::warn!("Language code {code:?} is not supported");
            }
            println!("{}", language_display_name(&code));
        }
        Commands::Apply {
            code,
            api_level,
            config,
        } => {
            let settings = Settings::load(&config)?;
            setup_logger(verbosity(cli.verbose, settings.log_level.into()))?;

            let api_level = api_level.map(ApiLevel).unwrap_or(settings.api_level);
            log::info!("Apply language {code:?} on API level {api_level}");

            let applier = LocaleApplier::for_api_level(api_level);
            let context = settings.base_context();
            let applied = applier.apply_language(&context, &code);

            let configuration = applied.configuration();
            match configuration.locale() {
                Some(locale) => println!("locale: {locale}"),
                None => println!("locale: (system)"),
            }
            println!("layout direction: {}", configuration.layout_direction());
            println!("derived context: {}", !applied.ptr_eq(&context));
            match applier.default_locale().default_locale() {
                Some(locale) => println!("default locale: {locale}"),
                None => println!("default locale: (unknown)"),
            }
        }
    }

    Ok(())
}

fn verbosity(verbose: bool, level: log::LevelFilter) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Debug
    } else {
        level
    }
}
