// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use ff_ind_rtn::{
    config::{self, Config},
    fetch::HttpSource,
    pipeline, SectionSelector,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

/// Download Fama-French 12 industry returns and save one section as CSV.
#[derive(Debug, Parser)]
#[command(name = "ff-ind-rtn", long_about = None)]
struct Cli {
    /// Rebalancing period in months: 1 (monthly) or 12 (annual).
    period: u32,

    /// Portfolio weighting: "value" or "equal".
    weighting: String,

    /// Base output directory.
    #[arg(default_value = config::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Archive URL.
    #[arg(long, env = "FF_IND_RTN_URL", default_value = config::DEFAULT_URL)]
    url: Url,

    /// Request timeout in seconds.
    #[arg(long, env = "FF_IND_RTN_TIMEOUT_SECS", default_value_t = config::DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,
}

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("ff-ind-rtn error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // reject bad input before touching the network
    let selector = SectionSelector::from_raw(cli.period, &cli.weighting)?;

    let cfg = Config {
        url: cli.url,
        timeout: Duration::from_secs(cli.timeout_secs),
    };
    info!(url = %cfg.url, timeout = ?cfg.timeout, "startup");

    let source = HttpSource::new(&cfg)?;
    let report = pipeline::run(&source, &selector, &cli.output_dir)
        .with_context(|| format!("section '{}'", selector.label()))?;

    let shown = report
        .path
        .canonicalize()
        .unwrap_or_else(|_| report.path.clone());
    println!("Saved to {}", shown.display());
    println!("Download and processing complete.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use zip::write::SimpleFileOptions;

    #[test]
    fn parses_positionals_with_default_dir() {
        let cli = Cli::try_parse_from(["ff-ind-rtn", "12", "equal"]).unwrap();
        assert_eq!(cli.period, 12);
        assert_eq!(cli.weighting, "equal");
        assert_eq!(cli.output_dir, PathBuf::from("./results"));
        assert_eq!(cli.timeout_secs, 60);
    }

    #[test]
    fn explicit_output_dir_and_url() {
        let cli = Cli::try_parse_from([
            "ff-ind-rtn",
            "1",
            "value",
            "/tmp/out",
            "--url",
            "http://localhost:8000/x.zip",
        ])
        .unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(cli.url.as_str(), "http://localhost:8000/x.zip");
    }

    #[test]
    fn missing_weighting_is_rejected() {
        assert!(Cli::try_parse_from(["ff-ind-rtn", "1"]).is_err());
    }

    /// Answer one request with 200 and `body`, return the URL to fetch it from.
    fn serve_once(body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(head.as_bytes()).unwrap();
            stream.write_all(&body).unwrap();
        });
        format!("http://127.0.0.1:{}/12_Industry_Portfolios_CSV.zip", port)
    }

    #[test]
    fn parse_failure_is_reported_against_the_section() {
        let mut body = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut body));
            zip.start_file("ind.csv", SimpleFileOptions::default())
                .unwrap();
            zip.write_all(b"nothing to see here\n").unwrap();
            zip.finish().unwrap();
        }
        let out = tempfile::tempdir().unwrap();
        let url = serve_once(body);
        let out_dir = out.path().to_string_lossy().into_owned();
        let cli = Cli::try_parse_from(["ff-ind-rtn", "1", "value", &out_dir, "--url", &url])
            .unwrap();

        let msg = format!("{:#}", run(cli).unwrap_err());
        assert_eq!(
            msg,
            "section 'Average Value Weighted Returns -- Monthly': \
             section not found: 'Average Value Weighted Returns -- Monthly'"
        );
    }

    #[test]
    fn invalid_selector_fails_before_fetch() {
        let cli = Cli::try_parse_from([
            "ff-ind-rtn",
            "3",
            "value",
            "--url",
            "http://127.0.0.1:9/never.zip",
        ])
        .unwrap();
        let err = run(cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ff_ind_rtn::Error>(),
            Some(ff_ind_rtn::Error::InvalidSelector { .. })
        ));
    }
}
