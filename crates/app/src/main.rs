use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::DEFAULT_QUIZ_SECONDS;
use services::{ApiStyle, AppServices, Clock, QuizApiConfig, QuizFlowService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, Locale, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "info,services=debug,ui=debug";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiStyle { raw: String },
    InvalidLocale { raw: String },
    InvalidDuration { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiStyle { raw } => write!(f, "invalid --api-style value: {raw}"),
            ArgsError::InvalidLocale { raw } => write!(f, "invalid --locale value: {raw}"),
            ArgsError::InvalidDuration { raw } => {
                write!(f, "invalid --duration value: {raw} (expected seconds > 0)")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    locale: Locale,
    quiz_flow: Arc<QuizFlowService>,
}

impl UiApp for DesktopApp {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }
}

/// Overrides collected from the command line. Anything left `None` falls back
/// to the environment and then to the built-in defaults.
#[derive(Debug, Default)]
struct Args {
    api_url: Option<String>,
    api_style: Option<ApiStyle>,
    locale: Option<Locale>,
    duration_secs: Option<u32>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--api-url <url>] [--api-style dev|hosted] [--locale en|mr] [--duration <secs>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", services::config::DEFAULT_API_URL);
    eprintln!("  --api-style dev");
    eprintln!("  --locale en");
    eprintln!("  --duration {DEFAULT_QUIZ_SECONDS}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_API_URL, QUIZ_API_STYLE, QUIZ_LOCALE, QUIZ_DURATION_SECS,");
    eprintln!("  QUIZ_HTTP_TIMEOUT_SECS, RUST_LOG");
}

fn parse_duration(raw: &str) -> Result<u32, ArgsError> {
    match raw.trim().parse::<u32>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ArgsError::InvalidDuration {
            raw: raw.to_string(),
        }),
    }
}

fn parse_locale(raw: &str) -> Result<Locale, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidLocale {
        raw: raw.to_string(),
    })
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    parsed.api_url = Some(require_value(args, "--api-url")?);
                }
                "--api-style" => {
                    let value = require_value(args, "--api-style")?;
                    let style = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidApiStyle { raw: value.clone() })?;
                    parsed.api_style = Some(style);
                }
                "--locale" => {
                    let value = require_value(args, "--locale")?;
                    parsed.locale = Some(parse_locale(&value)?);
                }
                "--duration" => {
                    let value = require_value(args, "--duration")?;
                    parsed.duration_secs = Some(parse_duration(&value)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn locale_from_env() -> Result<Locale, ArgsError> {
    std::env::var("QUIZ_LOCALE")
        .ok()
        .map_or(Ok(Locale::default()), |raw| parse_locale(&raw))
}

fn duration_from_env() -> Result<u32, ArgsError> {
    std::env::var("QUIZ_DURATION_SECS")
        .ok()
        .map_or(Ok(DEFAULT_QUIZ_SECONDS), |raw| parse_duration(&raw))
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let mut api_config = QuizApiConfig::from_env_with_url(args.api_url.as_deref())?;
    if let Some(style) = args.api_style {
        api_config = api_config.with_style(style);
    }
    let locale = match args.locale {
        Some(locale) => locale,
        None => locale_from_env()?,
    };
    let duration_secs = match args.duration_secs {
        Some(secs) => secs,
        None => duration_from_env()?,
    };

    info!(
        api_url = %api_config.base_url(),
        api_style = %api_config.style(),
        %locale,
        duration_secs,
        "starting quiz app"
    );

    let services = AppServices::new_http(api_config, Clock::system(), duration_secs)?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        locale,
        quiz_flow: services.quiz_flow(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(locale.labels().app_title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(ToString::to_string);
        Args::parse(&mut iter)
    }

    #[test]
    fn parses_every_flag() {
        let args = parse(&[
            "--api-url",
            "https://quiz.example.com",
            "--api-style",
            "hosted",
            "--locale",
            "mr",
            "--duration",
            "600",
        ])
        .unwrap();
        assert_eq!(args.api_url.as_deref(), Some("https://quiz.example.com"));
        assert_eq!(args.api_style, Some(ApiStyle::Hosted));
        assert_eq!(args.locale, Some(Locale::Marathi));
        assert_eq!(args.duration_secs, Some(600));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            parse(&["--duration", "0"]),
            Err(ArgsError::InvalidDuration { .. })
        ));
        assert!(matches!(
            parse(&["--locale", "fr"]),
            Err(ArgsError::InvalidLocale { .. })
        ));
        assert!(matches!(
            parse(&["--api-style", "cloud"]),
            Err(ArgsError::InvalidApiStyle { .. })
        ));
        assert!(matches!(
            parse(&["--api-url"]),
            Err(ArgsError::MissingValue { flag: "--api-url" })
        ));
        assert!(matches!(parse(&["--db"]), Err(ArgsError::UnknownArg(_))));
    }
}
