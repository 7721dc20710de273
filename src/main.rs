//! Keyboard Signature CLI
//!
//! Usage:
//!   keyboard-signature [OPTIONS] [TEXT]
//!
//! Options:
//!   -l, --layout <LAYOUT>    Built-in keyboard layout
//!   -c, --curve <STYLE>      Curve style connecting the keys
//!   -n, --numbers            Include the numeric row
//!   -k, --keys               Draw the keyboard under the signature
//!   -p, --path-only          Print only the SVG path data
//!   --parse <D>              Parse path data and re-emit it
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use keyboard_signature::{
    parse_path_data, render_path_data, render_with_config, signature_path, to_data_uri,
    CurveStyle, KeyGrid, KeyboardLayout, RenderConfig, RenderError, StrokeStyle, Theme,
};

#[derive(Parser)]
#[command(name = "keyboard-signature")]
#[command(about = "Draw a signature by tracing text across a keyboard")]
struct Cli {
    /// Text to sign (reads from stdin if not provided)
    text: Option<String>,

    /// Built-in keyboard layout
    #[arg(short, long, value_enum, default_value_t = KeyboardLayout::Qwerty)]
    layout: KeyboardLayout,

    /// Curve style connecting the keys
    #[arg(short, long, value_enum, default_value_t = CurveStyle::Linear)]
    curve: CurveStyle,

    /// Include the numeric row
    #[arg(short, long)]
    numbers: bool,

    /// Custom key layout (TOML format), replaces --layout
    #[arg(long, value_name = "FILE")]
    layout_file: Option<PathBuf>,

    /// Theme file for colors (TOML format)
    #[arg(short, long, value_name = "FILE")]
    theme: Option<PathBuf>,

    /// Use the built-in light theme
    #[arg(long, conflicts_with = "theme")]
    light: bool,

    /// Stroke color
    #[arg(long, value_name = "COLOR")]
    color: Option<String>,

    /// Gradient end color
    #[arg(long, value_name = "COLOR")]
    color2: Option<String>,

    /// Paint the stroke with a gradient
    #[arg(short, long)]
    gradient: bool,

    /// Stroke width in pixels
    #[arg(short = 'w', long, default_value_t = 2.0)]
    stroke_width: f64,

    /// Draw the keyboard under the signature
    #[arg(short, long)]
    keys: bool,

    /// Prefix for CSS classes and ids (empty for none)
    #[arg(long, value_name = "PREFIX")]
    class_prefix: Option<String>,

    /// Print only the SVG path data
    #[arg(short, long)]
    path_only: bool,

    /// Print the SVG as a base64 data URI
    #[arg(long, conflicts_with = "path_only")]
    data_uri: bool,

    /// Parse path data and re-emit it instead of signing text
    #[arg(long, value_name = "D")]
    parse: Option<String>,

    /// List the built-in keyboard layouts
    #[arg(long)]
    list_layouts: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Debug logging (same as RUST_LOG=debug)
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if cli.list_layouts {
        print_layouts();
        return;
    }

    if let Some(d) = &cli.parse {
        let output = match parse_command(&cli, d) {
            Ok(output) => output,
            Err(RenderError::PathData(errors)) => {
                for error in &errors {
                    eprint!("{}", error.format(d, "<path>"));
                }
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        write_output(&cli, &output);
        return;
    }

    // If no text and stdin is a terminal (interactive), show intro help
    if cli.text.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let text = match &cli.text {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer.trim_end_matches(['\r', '\n']).to_string(),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match sign_command(&cli, &text) {
        Ok(output) => write_output(&cli, &output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Build the render configuration from command line flags
fn build_config(cli: &Cli) -> Result<RenderConfig, RenderError> {
    let theme = match &cli.theme {
        Some(path) => Theme::from_file(path)?,
        None if cli.light => Theme::light(),
        None => Theme::dark(),
    };

    let mut config = RenderConfig::new()
        .with_layout(cli.layout)
        .with_numbers(cli.numbers)
        .with_curve(cli.curve)
        .with_theme(theme)
        .with_keys(cli.keys);

    if let Some(path) = &cli.layout_file {
        config = config.with_grid(KeyGrid::from_file(path)?);
    }

    let mut svg = config.svg.clone().with_stroke_width(cli.stroke_width);
    if let Some(color) = &cli.color {
        svg = svg.with_stroke_color(color);
    }
    if let Some(color) = &cli.color2 {
        svg = svg.with_secondary_color(color);
    }
    if cli.gradient {
        svg = svg.with_stroke_style(StrokeStyle::Gradient);
    }
    match cli.class_prefix.as_deref() {
        Some("") => svg = svg.without_class_prefix(),
        Some(prefix) => svg = svg.with_class_prefix(prefix),
        None => {}
    }

    Ok(config.with_svg(svg))
}

fn sign_command(cli: &Cli, text: &str) -> Result<String, RenderError> {
    let config = build_config(cli)?;

    if cli.path_only {
        let path = signature_path(text, &config)?;
        return Ok(path.to_svg_d_with_precision(config.svg.precision));
    }

    let svg = render_with_config(text, &config)?;
    Ok(if cli.data_uri { to_data_uri(&svg) } else { svg })
}

fn parse_command(cli: &Cli, d: &str) -> Result<String, RenderError> {
    if cli.path_only {
        return Ok(parse_path_data(d)?.to_svg_d());
    }

    let config = build_config(cli)?;
    let svg = render_path_data(d, &config)?;
    Ok(if cli.data_uri { to_data_uri(&svg) } else { svg })
}

fn write_output(cli: &Cli, output: &str) {
    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, format!("{}\n", output)) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", output),
    }
}

fn print_layouts() {
    for layout in KeyboardLayout::ALL {
        let grid = KeyGrid::builtin(layout, false);
        let rows: Vec<String> = (0..3)
            .map(|row| {
                grid.iter()
                    .filter(|(_, pos)| pos.y == row as f64)
                    .map(|(key, _)| key)
                    .collect()
            })
            .collect();
        println!("{:<8} {}", layout.as_str(), rows.join(" / "));
    }
}

fn print_intro() {
    println!(
        r#"Keyboard Signature - Draw a signature by tracing text across a keyboard

USAGE:
    keyboard-signature [OPTIONS] [TEXT]
    echo 'text' | keyboard-signature

OPTIONS:
    -l, --layout <LAYOUT>   qwerty, azerty, colemak, dvorak, abcdef
    -c, --curve <STYLE>     linear, catmull-rom, quadratic-bezier,
                            cubic-bezier, simple-curve
    -n, --numbers           Include the numeric row
    --layout-file <FILE>    Custom key layout (TOML file)
    -t, --theme <FILE>      Custom colors (TOML file)
    --light                 Light theme
    --color, --color2       Stroke and gradient end colors
    -g, --gradient          Gradient stroke
    -k, --keys              Draw the keyboard under the signature
    --class-prefix <P>      CSS class and id prefix (default sig-)
    -p, --path-only         Print only the path data
    --data-uri              Print a base64 data URI
    --parse <D>             Parse path data and re-emit it
    --list-layouts          List built-in layouts
    -o, --output <FILE>     Write to a file
    -d, --debug             Debug logging
    -h, --help              Print help

QUICK START:
    keyboard-signature --curve catmull-rom --gradient 'Ada Lovelace' > signature.svg"#
    );
}
