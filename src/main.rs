use anyhow::Result;
use clap::Parser;
use diskmon::classifier;
use diskmon::collectors::{mounts, usage};
use diskmon::config::Config;
use diskmon::util::human::{fmt_bytes, fmt_pct};

#[derive(Parser, Debug)]
#[command(name = "diskmon", about = "Physical-disk capacity/usage snapshot", version = "0.1")]
struct Cli {
    /// Pretty-print the JSON snapshot
    #[arg(short, long)]
    pretty: bool,

    /// Print a human-readable report and exit
    #[arg(long)]
    report: bool,

    /// List every enumerated mount with its classification and exit
    #[arg(long)]
    mounts: bool,

    /// Run headless: print one timestamped JSON line per interval
    #[arg(long)]
    watch: bool,

    /// Watch interval in milliseconds (overrides config)
    #[arg(short, long)]
    interval: Option<u64>,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = Config::load();

    if cli.report {
        return run_report();
    }
    if cli.mounts {
        return run_mounts();
    }
    if cli.config {
        return run_print_config(&cfg);
    }
    if cli.watch {
        let interval = cli.interval.unwrap_or(cfg.general.update_interval_ms);
        return run_watch(interval);
    }

    run_snapshot(cli.pretty || cfg.output.pretty)
}

fn run_snapshot(pretty: bool) -> Result<()> {
    let info = diskmon::disk();
    let out = if pretty {
        serde_json::to_string_pretty(&info)?
    } else {
        serde_json::to_string(&info)?
    };
    println!("{}", out);
    Ok(())
}

fn run_report() -> Result<()> {
    let info = diskmon::disk();
    println!("Physical disk usage as of {}", chrono::Local::now().to_rfc3339());
    println!("  total: {:>10}", fmt_bytes(info.total));
    println!("  used:  {:>10}  ({})", fmt_bytes(info.used), fmt_pct(info.use_pct()));
    println!();

    let parts = mounts::enumerate().unwrap_or_default();
    for part in &parts {
        if !classifier::is_physical_disk(part) { continue; }
        match usage::query(&part.mountpoint) {
            Ok(u) => println!(
                "  {:<24} {:<8} {:>10} / {:>10}",
                part.mountpoint, part.fstype, fmt_bytes(u.used), fmt_bytes(u.total)
            ),
            Err(_) => println!("  {:<24} {:<8} (unreadable)", part.mountpoint, part.fstype),
        }
    }
    Ok(())
}

fn run_mounts() -> Result<()> {
    let parts = mounts::enumerate().unwrap_or_default();
    if parts.is_empty() {
        println!("No mounts enumerated.");
        return Ok(());
    }
    for part in &parts {
        match classifier::exclusion_reason(part) {
            None => println!(
                "physical  {:<24} {:<10} {}",
                part.mountpoint, part.fstype, part.device
            ),
            Some(reason) => println!(
                "excluded  {:<24} {:<10} {}  [{}]",
                part.mountpoint, part.fstype, part.device, reason
            ),
        }
    }
    Ok(())
}

fn run_watch(interval_ms: u64) -> Result<()> {
    eprintln!("diskmon watch starting (interval {}ms)…", interval_ms);
    let tick = std::time::Duration::from_millis(interval_ms.max(500));

    loop {
        let info = diskmon::disk();
        let line = serde_json::json!({
            "timestamp": chrono::Local::now().to_rfc3339(),
            "disk": info,
        });
        println!("{}", line);
        std::thread::sleep(tick);
    }
}

fn run_print_config(cfg: &Config) -> Result<()> {
    let path = Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Config: {}", path);
    println!();
    println!("[general]");
    println!("  update_interval_ms = {}", cfg.general.update_interval_ms);
    println!();
    println!("[output]");
    println!("  pretty = {}", cfg.output.pretty);
    Ok(())
}
