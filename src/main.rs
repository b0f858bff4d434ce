//! Binary entrypoint for the headless image carousel.
//!
//! Mounts one carousel from the YAML config, reads host commands from stdin
//! and prints the rendered view to stdout after every change.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use image_carousel::config::Configuration;
use image_carousel::console::{HostCommand, Toggle, USAGE};
use image_carousel::events::CarouselEvent;
use image_carousel::keys::KeyBus;
use image_carousel::settings::SettingsPanel;
use image_carousel::tasks::carousel::{self, MountedCarousel};
use image_carousel::view::CarouselView;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "carousel", version, about = "Headless image carousel")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Override the autoplay interval (ms)
    #[arg(long, value_name = "MILLIS")]
    interval_ms: Option<u64>,

    /// Start with autoplay disabled
    #[arg(long)]
    no_autoplay: bool,

    /// Print views as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(
            format!("image_carousel={level}")
                .parse()
                .context("invalid log directive")?,
        )
        .add_directive(
            format!("carousel={level}")
                .parse()
                .context("invalid log directive")?,
        );
    // stdout is reserved for rendered views
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

struct Host {
    panel: SettingsPanel,
    keys: KeyBus,
    json: bool,
}

impl Host {
    fn print_view(&self, view: &CarouselView) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(view)?);
        } else {
            print!("{view}");
        }
        Ok(())
    }

    // the carousel publishes the re-rendered view once it has applied this
    async fn reconfigure(&self, mounted: &MountedCarousel) -> Result<()> {
        mounted
            .send(CarouselEvent::Configure(self.panel.options().clone()))
            .await
    }

    async fn apply(&mut self, cmd: HostCommand, mounted: &MountedCarousel) -> Result<()> {
        match cmd {
            HostCommand::Event(ev) => mounted.send(ev).await?,
            HostCommand::GoTo(index) => match mounted.view().click_indicator(index) {
                Some(ev) => mounted.send(ev).await?,
                None => warn!(slide = index + 1, "no such indicator on screen"),
            },
            HostCommand::Key(key) => {
                let delivered = self.keys.press(key);
                debug!(delivered, "key pressed");
            }
            HostCommand::Settings => {
                self.panel.toggle_visible();
                if self.panel.is_visible() {
                    print!("{}", self.panel);
                }
                println!("[{}]", self.panel.button_label());
            }
            HostCommand::Toggle(toggle) => {
                match toggle {
                    Toggle::AutoPlay => self.panel.toggle_auto_play(),
                    Toggle::Controls => self.panel.toggle_controls(),
                    Toggle::Indicators => self.panel.toggle_indicators(),
                }
                self.reconfigure(mounted).await?;
            }
            HostCommand::Interval(ms) => {
                let applied = self.panel.set_interval_ms(ms);
                if applied != ms {
                    info!(requested = ms, applied, "interval adjusted to slider range");
                }
                self.reconfigure(mounted).await?;
            }
            HostCommand::Show => self.print_view(&mounted.view())?,
            HostCommand::Quit => {}
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut cfg = Configuration::from_yaml_file(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(ms) = cli.interval_ms {
        cfg.carousel.interval = Duration::from_millis(ms);
    }
    if cli.no_autoplay {
        cfg.carousel.auto_play = false;
    }
    let cfg = cfg.validated().context("validating configuration")?;
    info!(
        slides = cfg.slides.len(),
        interval = %humantime::format_duration(cfg.carousel.interval),
        "loaded configuration from {}",
        cli.config.display()
    );

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!("ctrl-c handler failed: {err}");
                return;
            }
            info!("ctrl-c received; initiating shutdown");
            cancel.cancel();
        });
    }

    let mut host = Host {
        panel: SettingsPanel::new(cfg.carousel.clone()),
        keys: KeyBus::default(),
        json: cli.json,
    };
    let mounted = carousel::mount(cfg.slides, cfg.carousel, &host.keys);
    let mut snapshots = mounted.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    eprintln!("{USAGE}");
    host.print_view(&mounted.view())?;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,

            changed = snapshots.changed() => {
                if changed.is_err() {
                    warn!("carousel stopped publishing state");
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                debug!(state = ?snapshot.state, "state changed");
                host.print_view(&snapshot.view)?;
            }

            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    info!("stdin closed; initiating shutdown");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<HostCommand>() {
                    Ok(HostCommand::Quit) => break,
                    Ok(cmd) => host.apply(cmd, &mounted).await?,
                    Err(err) => {
                        warn!("{err:#}");
                        eprintln!("{USAGE}");
                    }
                }
            }
        }
    }

    mounted.unmount().await
}
