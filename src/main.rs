use clap::Parser;
use partner_filter::utils::error::{ErrorSeverity, FilterError};
use partner_filter::utils::{logger, validation::Validate};
use partner_filter::{
    CliArgs, DirectorySource, HtmlDirectory, PartnerFilter, Renderer, TextRenderer, WidgetConfig,
};

fn main() {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting partner-filter preview");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    if let Err(e) = run(&args) {
        tracing::error!(
            "❌ Preview failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn load_config(args: &CliArgs) -> Result<WidgetConfig, FilterError> {
    let config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            WidgetConfig::from_file(path)?
        }
        None => WidgetConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run(args: &CliArgs) -> Result<(), FilterError> {
    let config = load_config(args)?;
    let directory = HtmlDirectory::from_file(&args.page, &config, args.path.as_deref())?;
    let snapshot = directory.snapshot()?;

    tracing::info!(
        "Page has {} sections, {} category links, locale {:?}",
        snapshot.sections.len(),
        snapshot.links.len(),
        snapshot.locale
    );

    let link_texts = snapshot.links.iter().map(|l| l.text.clone()).collect();
    let mut renderer = TextRenderer::new(std::io::stdout().lock(), args.format, link_texts);
    let mut widget = PartnerFilter::new(config.labels.all_partners.clone());

    renderer.render(&widget.initial_render(&snapshot))?;

    for scripted in &args.events {
        let event = scripted.to_widget_event(&snapshot, &config.labels.all_partners)?;
        let prevent_default = widget.dispatch(event, &directory, &mut renderer)?;
        tracing::debug!("{:?} handled, prevent default: {}", scripted, prevent_default);
    }

    tracing::info!(
        "✅ Replayed {} events, final mode {:?}",
        args.events.len(),
        widget.mode()
    );
    Ok(())
}
