//! Giftbox - Send a virtual gift by email
//!
//! This is the main entry point. It handles:
//! 1. CLI argument parsing (--silent, --config, etc.)
//! 2. Loading the EmailJS configuration
//! 3. Launching the GTK4/Libadwaita wizard or a headless send

use anyhow::{Context, Result};
use clap::Parser;
use giftbox::catalog::{self, Category};
use giftbox::config::{self, GiftboxConfig};
use giftbox::controller::{DeliveryFollowUp, WizardController};
use giftbox::delivery::{DeliveryFailure, QueuedCourier};
use giftbox::emailjs::EmailJsClient;
use giftbox::selection::{Toggle, MAX_SELECTION};
use giftbox::surface::{Field, MemorySurface};
use giftbox::ui;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Giftbox - pick up to five virtual gifts and send them by email
#[derive(Parser, Debug)]
#[command(name = "giftbox")]
#[command(about = "Send a virtual gift by email")]
#[command(version)]
struct Args {
    /// Send without the GUI (requires --to, --from and at least one --gift)
    #[arg(long)]
    silent: bool,

    /// Recipient email address
    #[arg(long, value_name = "EMAIL", requires = "silent")]
    to: Option<String>,

    /// Sender name shown to the recipient
    #[arg(long, value_name = "NAME", requires = "silent")]
    from: Option<String>,

    /// Personal message (a default greeting is used when omitted)
    #[arg(long, value_name = "TEXT", requires = "silent")]
    message: Option<String>,

    /// Gift to include, by name (repeatable, up to five)
    #[arg(long = "gift", value_name = "NAME", requires = "silent")]
    gifts: Vec<String>,

    /// Path to giftbox.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the gift catalog and exit
    #[arg(long)]
    list_gifts: bool,

    /// Print a configuration template and exit
    #[arg(long)]
    print_config: bool,

    /// Log even in silent mode
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging - only if not in silent mode
    if !args.silent || args.verbose {
        let _ = FmtSubscriber::builder()
            .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
            .with_target(false)
            .without_time()
            .try_init();
    }

    if args.print_config {
        print!("{}", config::generate_template());
        return Ok(());
    }

    if args.list_gifts {
        list_gifts();
        return Ok(());
    }

    info!("Giftbox v{}", env!("CARGO_PKG_VERSION"));

    let config = GiftboxConfig::load(args.config.as_deref())?;

    if args.silent {
        run_silent_send(args, config)
    } else {
        run_gui(config)
    }
}

fn list_gifts() {
    let categories = [
        Category::Romantic,
        Category::SweetTreats,
        Category::CuteAndFun,
        Category::Everyday,
        Category::Fancy,
    ];

    for category in categories {
        println!("{}", category.label());
        for gift in catalog::catalog().iter().filter(|g| g.category == category) {
            println!("  {}", gift.label());
        }
    }
}

/// Drive the wizard without a display: select, fill in, send, confirm
fn run_silent_send(args: Args, config: GiftboxConfig) -> Result<()> {
    config.validate()?;

    if args.gifts.is_empty() {
        anyhow::bail!("Choose at least one gift with --gift (see --list-gifts)");
    }
    if args.gifts.len() > MAX_SELECTION {
        anyhow::bail!("You can send at most {} gifts at once", MAX_SELECTION);
    }

    let mut surface = MemorySurface::new();
    surface.set_field(Field::RecipientEmail, args.to.unwrap_or_default());
    surface.set_field(Field::SenderName, args.from.unwrap_or_default());
    surface.set_field(Field::Message, args.message.unwrap_or_default());

    // No animation to wait for on a terminal
    let mut controller = WizardController::new(surface, QueuedCourier::new(), Duration::ZERO);

    for name in &args.gifts {
        let gift = catalog::find_by_name(name)
            .with_context(|| format!("Unknown gift '{}' (see --list-gifts)", name))?;
        if controller.toggle(*gift)? == Toggle::Removed {
            anyhow::bail!("Gift '{}' is listed more than once", gift.name);
        }
    }

    controller.next();
    controller.submit()?;

    let params = controller
        .courier_mut()
        .take()
        .context("Nothing was queued for delivery")?;

    info!("Sending {} to {}", params.gifts, params.to_email);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.magenta} {msg}")?);
    pb.set_message("Wrapping your gift...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let rt = tokio::runtime::Runtime::new().context("Failed to start the async runtime")?;
    let client = EmailJsClient::new(config.emailjs)?;
    let outcome = rt
        .block_on(client.send(&params))
        .map_err(DeliveryFailure::from);

    pb.finish_and_clear();

    if let Err(failure) = &outcome {
        error!("Delivery failed: {}", failure.reason);
    }

    match controller.on_delivery_result(outcome) {
        DeliveryFollowUp::ConfirmAfter(_) => {
            controller.confirm_delivery();
            println!("✅ Gift sent to {}!", params.to_email);
            println!("   {}", params.gifts);
            println!("   \"{}\"", params.message);
            println!("   With love from {}", params.from_name);
            Ok(())
        }
        DeliveryFollowUp::ReturnedToForm(err) => Err(err.into()),
        DeliveryFollowUp::Ignored => anyhow::bail!("Delivery finished in an unexpected state"),
    }
}

fn run_gui(config: GiftboxConfig) -> Result<()> {
    // Check for display availability before initializing GTK
    if std::env::var("DISPLAY").is_err() && std::env::var("WAYLAND_DISPLAY").is_err() {
        eprintln!("Error: No display server detected (X11 or Wayland).");
        eprintln!();
        eprintln!("To send without a window, use:");
        eprintln!(
            "  {} --silent --to EMAIL --from NAME --gift Rose",
            std::env::current_exe()?.display()
        );
        std::process::exit(1);
    }

    if let Err(e) = gtk::init() {
        eprintln!("Failed to initialize GTK4: {}", e);
        eprintln!("Please ensure GTK4 is installed on your system.");
        std::process::exit(1);
    }

    if let Err(e) = adw::init() {
        eprintln!("Failed to initialize Libadwaita: {}", e);
        eprintln!("Please ensure Libadwaita is installed on your system.");
        std::process::exit(1);
    }

    let app = ui::app::GiftboxApplication::new(config);
    let exit_code = app.run();

    std::process::exit(exit_code.into());
}
