use std::{
    fs::OpenOptions,
    io::{self, Read, Write},
};

use log::{error, info};

use crate::error::Result;
use crate::tools::cli::{HzOpts, Output};

/// File extension added to compressed files.
pub const EXTENSION: &str = ".hz";

/// Read the whole input named in the options, or stdin when no file was given.
pub fn read_input(opts: &HzOpts) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    match &opts.file {
        Some(f) => {
            data = std::fs::read(f).map_err(|e| {
                error!("Cannot read from the file {}", f);
                e
            })?;
            info!("Read {} bytes from {}.", data.len(), f);
        }
        None => {
            io::stdin().lock().read_to_end(&mut data)?;
            info!("Read {} bytes from stdin.", data.len());
        }
    }
    Ok(data)
}

/// Write the result either to stdout or to the named file. An existing file is only replaced when
/// force_overwrite is set.
pub fn write_output(opts: &HzOpts, fname: &str, data: &[u8]) -> Result<()> {
    if opts.output == Output::Stdout {
        let mut out = io::stdout().lock();
        out.write_all(data)?;
        out.flush()?;
        return Ok(());
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if opts.force_overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut f_out = options.open(fname).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            error!("{} already exists. Use -f to overwrite it.", fname);
        } else {
            error!("Cannot write to the file {}", fname);
        }
        e
    })?;
    f_out.write_all(data)?;
    info!("Wrote {} bytes to {}.", data.len(), fname);
    Ok(())
}

/// Name of the compressed file for an input file.
pub fn zip_name(input: Option<&str>) -> String {
    format!("{}{}", input.unwrap_or("stdin"), EXTENSION)
}

/// Name of the restored file for a compressed file: strip .hz, or add .out if there is no .hz to strip.
pub fn unzip_name(input: Option<&str>) -> String {
    let input = input.unwrap_or("stdin");
    match input.strip_suffix(EXTENSION) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => format!("{}.out", input),
    }
}
