use merkviz::VizConfig;
use merkviz::render::{Renderer, sanitize_svg_id};
use serde_json::Value;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Config(merkviz::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Config(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<merkviz::Error> for CliError {
    fn from(value: merkviz::Error) -> Self {
        Self::Config(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    Layout,
    #[default]
    Render,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    config: Option<String>,
    diagram_id: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "merkviz-cli\n\
\n\
USAGE:\n\
  merkviz-cli [render] [--config <path|json>] [--id <diagram-id>] [--out <path>] [<path>|-]\n\
  merkviz-cli layout [--pretty] [--config <path|json>] [<path>|-]\n\
\n\
NOTES:\n\
  - Input is a JSON array of levels, leaves first, e.g. [[\"a\",\"b\"],[\"root\"]].\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - layout prints the computed layout as JSON.\n\
  - An empty or non-array input renders nothing and exits 0.\n\
  - --config takes a path to a JSON file, or inline JSON starting with '{'.\n\
    Overrides live under the `tree` key, e.g. {\"tree\":{\"width\":900}}.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--config" => {
                let Some(source) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(source.clone());
            }
            "--id" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.diagram_id = Some(id.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                while it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn load_config(source: Option<&str>) -> Result<VizConfig, CliError> {
    let Some(source) = source else {
        return Ok(VizConfig::default());
    };
    let text = if source.trim_start().starts_with('{') {
        source.to_string()
    } else {
        std::fs::read_to_string(source)?
    };
    let value: Value = serde_json::from_str(&text)?;
    Ok(VizConfig::from_value(value))
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let value: Value = serde_json::from_str(&text)?;

    let mut renderer = Renderer::new().with_config(load_config(args.config.as_deref())?);
    if let Some(id) = args.diagram_id.as_deref() {
        renderer.svg.diagram_id = Some(sanitize_svg_id(id));
    }

    match args.command {
        Command::Layout => {
            let Some(layout) = renderer.layout_sync(&value)? else {
                return Ok(());
            };
            let out = if args.pretty {
                serde_json::to_string_pretty(&layout)?
            } else {
                serde_json::to_string(&layout)?
            };
            write_text(&out, args.out.as_deref())
        }
        Command::Render => {
            let Some(svg) = renderer.render_svg_sync(&value)? else {
                return Ok(());
            };
            write_text(&svg, args.out.as_deref())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
