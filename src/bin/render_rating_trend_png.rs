#[cfg(feature = "cairo-backend")]
use rating_trend::api::{RatingTrendConfig, RatingTrendWidget};
#[cfg(feature = "cairo-backend")]
use rating_trend::core::Insets;
#[cfg(feature = "cairo-backend")]
use std::fs::{self, File};
#[cfg(feature = "cairo-backend")]
use std::io::BufWriter;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const USAGE: &str = "usage: render_rating_trend_png --ratings <5,4,2,...> --output <path> \
                     [--width <px>] [--padding <px>] [--config <path>]";

#[cfg(feature = "cairo-backend")]
const DEFAULT_WIDTH_PX: i32 = 328;

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    ratings: Vec<i32>,
    output: PathBuf,
    width: i32,
    padding: i32,
    config: Option<PathBuf>,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = rating_trend::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            RatingTrendConfig::from_json_compat_str(&raw).map_err(|err| err.to_string())?
        }
        None => RatingTrendConfig::default(),
    };

    let mut widget = RatingTrendWidget::new(config).map_err(|err| err.to_string())?;
    widget.set_padding(Insets::uniform(args.padding));
    widget
        .set_rating_sequence(&args.ratings)
        .map_err(|err| err.to_string())?;

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create `{}`: {err}", parent.display()))?;
        }
    }
    let file = File::create(&args.output)
        .map_err(|err| format!("failed to create `{}`: {err}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    let stats = widget
        .render_png(args.width, &mut writer)
        .map_err(|err| err.to_string())?;

    println!(
        "wrote {} ({} glyphs)",
        args.output.display(),
        stats.glyphs_drawn
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);

    let mut ratings = None::<Vec<i32>>;
    let mut output = None::<PathBuf>;
    let mut width = DEFAULT_WIDTH_PX;
    let mut padding = 0;
    let mut config = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let mut value_for = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--ratings" => ratings = Some(parse_ratings(&value_for("--ratings")?)?),
            "--output" => output = Some(PathBuf::from(value_for("--output")?)),
            "--width" => width = parse_px("--width", &value_for("--width")?)?,
            "--padding" => padding = parse_px("--padding", &value_for("--padding")?)?,
            "--config" => config = Some(PathBuf::from(value_for("--config")?)),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    Ok(CliArgs {
        ratings: ratings.ok_or_else(|| format!("missing --ratings\n{USAGE}"))?,
        output: output.ok_or_else(|| format!("missing --output\n{USAGE}"))?,
        width,
        padding,
        config,
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_ratings(raw: &str) -> Result<Vec<i32>, String> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<i32>()
                .map_err(|err| format!("invalid rating `{part}`: {err}"))
        })
        .collect()
}

#[cfg(feature = "cairo-backend")]
fn parse_px(flag: &str, raw: &str) -> Result<i32, String> {
    let value = raw
        .parse::<i32>()
        .map_err(|err| format!("invalid value for {flag}: {err}"))?;
    if value < 0 {
        return Err(format!("{flag} must be >= 0"));
    }
    Ok(value)
}
