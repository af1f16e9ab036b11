mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, Settings};
use oscal_component_gen::prelude::*;
use std::path::Path;
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(args.format, args.output, args.store_dir, config)?;

    if args.latest {
        return present_latest(&settings);
    }

    // clap guarantees an input unless --latest was given
    let input = args.input.ok_or_else(|| ComponentDefinitionError::Validation {
        message: "an input CSV file is required".to_string(),
    })?;

    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = GenerateComponentDefinitionUseCase::new(
        CsvControlReader::from_path(input),
        UuidGenerator::new(),
        progress_reporter,
    );
    let response = use_case.execute(GenerationRequest::new(!args.quiet))?;

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }
    let formatter = FormatterFactory::create(settings.format);
    let content = formatter.format(&response.document)?;

    if let Some(store_dir) = settings.store_dir.as_deref() {
        let store = FileSystemDocumentStore::open(store_dir)?;
        let stored = store.save(
            response.document_id(),
            formatter.file_extension(),
            &content,
        )?;
        if !args.quiet {
            eprintln!("💾 Stored as {}", stored.display());
        }
    }

    PresenterFactory::create(PresenterType::from_output(settings.output)).present(&content)
}

fn present_latest(settings: &Settings) -> Result<()> {
    let store_dir = settings
        .store_dir
        .as_deref()
        .ok_or_else(|| ComponentDefinitionError::Validation {
            message: "--latest requires a store directory (--store-dir or store_dir in the config file)"
                .to_string(),
        })?;

    let store = FileSystemDocumentStore::open(store_dir)?;
    let content = store.latest()?.ok_or_else(|| ComponentDefinitionError::StoreError {
        path: store.root().to_path_buf(),
        details: "No component definition has been stored yet".to_string(),
    })?;

    PresenterFactory::create(PresenterType::from_output(settings.output.clone())).present(&content)
}
