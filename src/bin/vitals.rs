//! vitals - live terminal widgets for host system metrics.
//!
//! One subcommand per widget:
//!   vitals clock --seconds        # wall clock with seconds
//!   vitals cpu 0.5                # per-core CPU usage, 0.5s interval
//!   vitals ram                    # RAM usage, printed once
//!   vitals disk 2                 # partition usage, refreshing every 2s
//!   vitals net                    # interface table with live throughput
//!   vitals dash                   # aggregate dashboard
//!   vitals stopwatch --numbers    # elapsed time, MM:SS:CC
//!   vitals timer 300 --end-message "tea is ready"

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use vitals::collector::{Collector, SysinfoSource};
use vitals::config::{RunConfig, lenient_seconds};
use vitals::tui::widgets::{
    ClockWidget, CpuWidget, DashWidget, DiskWidget, FrameSource, NetWidget, RamWidget,
    StopwatchWidget, TimerWidget,
};
use vitals::tui::{App, CancelToken, LoopExit};

/// Live terminal widgets for host system metrics.
#[derive(Parser)]
#[command(name = "vitals", about = "Live terminal widgets for host system metrics")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log errors only.
    #[arg(short = 'q', long = "quiet", global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show the clock.
    Clock {
        /// Show seconds instead of the blinking dots.
        #[arg(long)]
        seconds: bool,
    },
    /// Show CPU usage per core, updating every INTERVAL seconds (default 1).
    Cpu {
        #[arg(value_name = "INTERVAL", value_parser = lenient_seconds)]
        interval: Option<f64>,
    },
    /// Show RAM usage. Renders once unless INTERVAL is given.
    Ram {
        #[arg(value_name = "INTERVAL", value_parser = lenient_seconds)]
        interval: Option<f64>,
    },
    /// Show disk usage for all partitions. Renders once unless INTERVAL is given.
    Disk {
        #[arg(value_name = "INTERVAL", value_parser = lenient_seconds)]
        interval: Option<f64>,
    },
    /// Show network interfaces with live throughput (default interval 2s).
    Net {
        #[arg(value_name = "INTERVAL", value_parser = lenient_seconds)]
        interval: Option<f64>,
    },
    /// Show a real-time dashboard with CPU, RAM, disk, network and uptime.
    Dash {
        #[arg(value_name = "INTERVAL", value_parser = lenient_seconds)]
        interval: Option<f64>,
    },
    /// Run a stopwatch.
    Stopwatch {
        /// Redraw cadence in seconds (default 0.01).
        #[arg(long, value_parser = lenient_seconds)]
        rate: Option<f64>,
        /// Numeric MM:SS:CC display instead of the worded format.
        #[arg(long)]
        numbers: bool,
    },
    /// Run a countdown timer of SECONDS seconds.
    Timer {
        #[arg(value_name = "SECONDS")]
        seconds: u64,
        /// Message printed when the countdown expires.
        #[arg(long = "end-message", value_name = "MSG")]
        end_message: Option<String>,
        /// Redraw cadence in seconds (default 0.01).
        #[arg(long, value_parser = lenient_seconds)]
        rate: Option<f64>,
    },
}

/// Initializes the tracing subscriber. Default level is ERROR so diagnostics
/// never scribble over the live display unless asked for.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::ERROR,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("vitals={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    // Cancellation token, also flipped by externally delivered SIGINT.
    let cancel = CancelToken::new();
    {
        let token = cancel.clone();
        if let Err(e) = ctrlc::set_handler(move || token.cancel()) {
            tracing::warn!("failed to set Ctrl-C handler: {}", e);
        }
    }

    let collector = || Collector::new(SysinfoSource::new());

    let is_timer = matches!(cli.command, Command::Timer { .. });
    let (config, widget): (RunConfig, Box<dyn FrameSource>) = match cli.command {
        Command::Clock { seconds } => {
            let config = RunConfig::clock(seconds);
            let widget = ClockWidget::new(&config);
            (config, Box::new(widget))
        }
        Command::Cpu { interval } => (
            RunConfig::cpu(interval),
            Box::new(CpuWidget::new(collector())),
        ),
        Command::Ram { interval } => (
            RunConfig::ram(interval),
            Box::new(RamWidget::new(collector())),
        ),
        Command::Disk { interval } => (
            RunConfig::disk(interval),
            Box::new(DiskWidget::new(collector())),
        ),
        Command::Net { interval } => (
            RunConfig::net(interval),
            Box::new(NetWidget::new(collector())),
        ),
        Command::Dash { interval } => (
            RunConfig::dash(interval),
            Box::new(DashWidget::new(collector())),
        ),
        Command::Stopwatch { rate, numbers } => {
            let config = RunConfig::stopwatch(rate, numbers);
            let widget = StopwatchWidget::new(&config);
            (config, Box::new(widget))
        }
        Command::Timer {
            seconds,
            end_message,
            rate,
        } => {
            let config = RunConfig::timer(seconds, rate, end_message);
            let widget = TimerWidget::new(&config);
            (config, Box::new(widget))
        }
    };

    if config.is_one_shot() {
        print!("{}", App::run_once(widget));
        return;
    }

    let app = App::new(widget, config.tick(), cancel);
    match app.run() {
        // Only natural completion prints the end message; interrupt stays quiet.
        Ok(LoopExit::Completed) => {
            if is_timer {
                println!("{}", config.end_message_or_default());
            }
        }
        Ok(LoopExit::Cancelled) => {}
        Err(e) => {
            eprintln!("Error running widget: {}", e);
            std::process::exit(1);
        }
    }
}
