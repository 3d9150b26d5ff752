use clap::Parser;
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Zip, Unzip, Test
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Define the two output channels
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Defines all user settable options to control program behavior
#[derive(Debug)]
pub struct HzOpts {
    /// Optional name of file to read for input (stdin if none)
    pub file: Option<String>,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
}

impl HzOpts {
    pub fn new() -> Self {
        Self {
            file: None,
            op_mode: Mode::Zip,
            output: Output::File,
            force_overwrite: false,
        }
    }
}

impl Default for HzOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A Huffman coding file compressor",
    long_about = None)]
pub struct Args {
    /// Filename of file to process
    #[clap()]
    filename: Option<String>,

    /// Perform compression on the input file (default)
    #[clap(short = 'z', long = "zip")]
    compress: bool,

    /// Perform decompression on the input file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Compress and decompress in memory and check the result
    #[clap(short = 't', long = "test")]
    test: bool,

    ///Force overwriting output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Sets verbosity. -v 1 is silent, -v 4 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Copy the parsed command line into our options struct.
pub fn opts_from_args(args: &Args) -> HzOpts {
    let mut hz_opts = HzOpts::new();
    hz_opts.file = args.filename.clone();
    if args.compress {
        hz_opts.op_mode = Mode::Zip
    };
    if args.decompress {
        hz_opts.op_mode = Mode::Unzip
    };
    if args.test {
        hz_opts.op_mode = Mode::Test
    };
    hz_opts.force_overwrite = args.force;
    if args.stdout {
        hz_opts.output = Output::Stdout
    };
    hz_opts
}

/// Map the -v setting onto a log level.
pub fn level_for(v: u8) -> log::LevelFilter {
    match v {
        0 | 1 => log::LevelFilter::Off,
        2 => log::LevelFilter::Error,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Parse the command line, set the log level and report the settings.
pub fn hzopts_init() -> HzOpts {
    let args = Args::parse();
    log::set_max_level(level_for(args.v));
    let hz_opts = opts_from_args(&args);

    info!("---- Huffzip Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", hz_opts.op_mode);
    match &hz_opts.file {
        Some(s) => info!("Getting input from the file {}", s),
        None => warn!("Reading input from stdin"),
    }
    info!("Output set to {}", hz_opts.output);
    if hz_opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    info!("---- Huffzip Initialization End ----\n");
    hz_opts
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_mode_test() {
        let args = Args::parse_from(["huffzip", "notes.txt"]);
        let opts = opts_from_args(&args);
        assert_eq!(opts.op_mode, Mode::Zip);
        assert_eq!(opts.output, Output::File);
        assert_eq!(opts.file.as_deref(), Some("notes.txt"));
        assert!(!opts.force_overwrite);
    }

    #[test]
    fn decompress_flags_test() {
        let args = Args::parse_from(["huffzip", "-d", "-f", "-c", "notes.txt.hz"]);
        let opts = opts_from_args(&args);
        assert_eq!(opts.op_mode, Mode::Unzip);
        assert_eq!(opts.output, Output::Stdout);
        assert!(opts.force_overwrite);
    }

    #[test]
    fn test_mode_test() {
        let args = Args::parse_from(["huffzip", "--test", "notes.txt"]);
        assert_eq!(opts_from_args(&args).op_mode, Mode::Test);
    }

    #[test]
    fn default_verbosity_shows_ratio_test() {
        // The ratio report is logged at info, so the default -v must let it through,
        // and no compile time cap may strip it out.
        let args = Args::parse_from(["huffzip", "notes.txt"]);
        assert_eq!(args.v, 3);
        assert!(log::Level::Info <= level_for(args.v));
        assert!(log::Level::Info <= log::STATIC_MAX_LEVEL);
        assert!(log::Level::Trace <= log::STATIC_MAX_LEVEL);
    }

    #[test]
    fn verbosity_test() {
        let args = Args::parse_from(["huffzip", "-v", "4"]);
        assert_eq!(level_for(args.v), log::LevelFilter::Debug);
        assert_eq!(level_for(1), log::LevelFilter::Off);
        assert_eq!(level_for(9), log::LevelFilter::Trace);
        assert!(opts_from_args(&args).file.is_none());
    }
}
