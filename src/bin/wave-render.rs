use std::env;
use std::fs;
use std::process;

use tracing::{debug, info};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use wave::{load_document, load_theme, RenderContext, SequentialIds, Theme, WaveError};

const USAGE: &str = "wave-render <page.yaml> [--theme <theme.yaml> | --default-theme] [--ids sequential]";

enum ThemeSource {
    None,
    Default,
    File(String),
}

struct Args {
    page: String,
    theme: ThemeSource,
    sequential_ids: bool,
}

fn main() {
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish()
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  wave-render page.yaml");
            eprintln!("  wave-render page.yaml --default-theme");
            eprintln!("  wave-render page.yaml --theme theme.yaml --ids sequential");
            process::exit(1);
        }
    };

    match render(&args) {
        Ok(html) => println!("{}", html),
        Err(e) => {
            eprintln!("✗ {} could not be rendered:", args.page);
            eprintln!("  {}", e);
            process::exit(1);
        }
    }
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, WaveError> {
    let mut page = None;
    let mut theme = ThemeSource::None;
    let mut sequential_ids = false;

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--theme" => {
                let path = raw
                    .next()
                    .ok_or_else(|| WaveError::Usage(format!("--theme needs a file\n{}", USAGE)))?;
                theme = ThemeSource::File(path);
            }
            "--default-theme" => theme = ThemeSource::Default,
            "--ids" => match raw.next().as_deref() {
                Some("sequential") => sequential_ids = true,
                Some("uuid") => sequential_ids = false,
                _ => {
                    return Err(WaveError::Usage(format!(
                        "--ids expects 'sequential' or 'uuid'\n{}",
                        USAGE
                    )))
                }
            },
            _ if page.is_none() => page = Some(arg),
            _ => return Err(WaveError::Usage(format!("unexpected argument '{}'\n{}", arg, USAGE))),
        }
    }

    let page = page.ok_or_else(|| WaveError::Usage(USAGE.to_string()))?;
    Ok(Args {
        page,
        theme,
        sequential_ids,
    })
}

fn render(args: &Args) -> Result<String, WaveError> {
    let content = fs::read_to_string(&args.page)?;
    let root = load_document(&content)?;
    debug!(page = %args.page, "document loaded");

    let theme = match &args.theme {
        ThemeSource::None => None,
        ThemeSource::Default => Some(Theme::default_theme()),
        ThemeSource::File(path) => Some(load_theme(&fs::read_to_string(path)?)?),
    };
    if let Some(theme) = &theme {
        info!(tags = theme.len(), "theme loaded");
    }

    let ids = SequentialIds::default();
    let mut ctx = RenderContext::new();
    if let Some(theme) = &theme {
        ctx = ctx.with_theme(theme);
    }
    if args.sequential_ids {
        ctx = ctx.with_ids(&ids);
    }

    Ok(root.render_with(&ctx))
}
