//! mmcat - dump a byte range of a file through a memory-mapped stream.

use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::io::{self, SeekFrom, Write};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    // Parse command-line arguments
    let matches = Command::new("mmcat")
        .version(mmstream::VERSION)
        .about("Dump a byte range of a file via memory-mapped streaming")
        .long_about(
            "mmcat opens a file through a read-only memory mapping and writes a byte \
             range of it to stdout, without copying the whole file into memory.",
        )
        .arg(
            Arg::new("file")
                .help("Path to the file to read")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("offset")
                .short('o')
                .long("offset")
                .help("Byte offset to start from; negative values count back from the end")
                .value_parser(clap::value_parser!(i64))
                .default_value("0"),
        )
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .help("Number of bytes to dump (default: the rest of the stream)")
                .value_parser(clap::value_parser!(u64)),
        )
        .get_matches();

    let file_path = PathBuf::from(
        matches
            .get_one::<String>("file")
            .expect("file argument is required"),
    );
    let offset = *matches.get_one::<i64>("offset").expect("offset has a default");
    let count = matches.get_one::<u64>("count").copied();

    let mut reader = mmstream::MappedFileReader::open(&file_path)
        .with_context(|| format!("Cannot open {}", file_path.display()))?;

    if offset < 0 {
        reader
            .seek(SeekFrom::End(offset))
            .with_context(|| format!("Offset {offset} is outside the file"))?;
    } else {
        reader
            .seek(SeekFrom::Start(offset as u64))
            .with_context(|| format!("Offset {offset} is outside the file"))?;
    }

    let remaining = reader.len() - reader.position();
    let mut left = count.unwrap_or(remaining).min(remaining);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut buf = vec![0u8; 64 * 1024];

    while left > 0 {
        let want = (buf.len() as u64).min(left) as usize;
        let read = reader.read(&mut buf[..want]);
        if read == 0 {
            break;
        }
        out.write_all(&buf[..read])
            .context("Failed to write to stdout")?;
        left -= read as u64;
    }
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
