use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use env_logger::Env;

use metrics_codegen::{parse_code_point, Error, Hinting, Options, DEFAULT_IMPORT_PATH};

/// Specifies how outlines are hinted when measuring bounding boxes.
#[derive(clap::ValueEnum, Copy, Clone, Default, Debug)]
enum HintingMode {
    /// The font's instructions, or the autohinter for unhinted fonts.
    #[default]
    Default,
    /// Disable hinting.
    None,
}

impl From<HintingMode> for Hinting {
    fn from(mode: HintingMode) -> Self {
        match mode {
            HintingMode::Default => Hinting::Default,
            HintingMode::None => Hinting::None,
        }
    }
}

/// Generate Go tables of glyph advances and bounding boxes from a font
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the font file
    font: PathBuf,
    /// Name of the generated Go package
    package: String,
    /// Code points to emit, in order (decimal, 0x-prefixed hex or 0-prefixed octal)
    #[arg(required = true, value_parser = parse_code_point)]
    code_points: Vec<u32>,
    /// Write the generated source here instead of to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Index of the face in a font collection
    #[arg(long, default_value_t = 0)]
    index: u32,
    /// Import path of the bounding box package
    #[arg(long, default_value = DEFAULT_IMPORT_PATH)]
    import_path: String,
    /// Size, in points, at which bounding boxes are measured
    #[arg(long, default_value_t = 1000.0)]
    char_size: f32,
    /// Resolution used with --char-size
    #[arg(long, default_value_t = 72)]
    dpi: u32,
    /// Hinting applied to outlines before measuring them
    #[arg(long, value_enum, default_value_t)]
    hinting: HintingMode,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // help and version go to stdout and are not failures
            if let Err(print_error) = e.print() {
                eprintln!("error: {print_error}");
            }
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match generate(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn generate(args: &Args) -> Result<(), Error> {
    let options = Options {
        import_path: args.import_path.clone(),
        face_index: args.index,
        char_size: args.char_size,
        dpi: args.dpi,
        hinting: args.hinting.into(),
    };
    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path).map_err(|source| Error::CreateOutput {
            path: path.clone(),
            source,
        })?),
        None => Box::new(io::stdout().lock()),
    };
    metrics_codegen::run(
        &args.font,
        &args.package,
        &args.code_points,
        &options,
        BufWriter::new(out),
    )
}
