use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

fn is_gzipped(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

/// Open a file for line-oriented reading (supports .gz compression)
pub fn open_input<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Buffered output file, gzip-compressed when the path ends in `.gz`.
///
/// Call [`OutputWriter::finish`] once writing is done so the gzip trailer
/// is written and any I/O error surfaces instead of being lost on drop.
pub enum OutputWriter {
    Plain(BufWriter<File>),
    Gzip(BufWriter<GzEncoder<File>>),
}

impl OutputWriter {
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;

        if is_gzipped(path) {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(OutputWriter::Gzip(BufWriter::new(encoder)))
        } else {
            Ok(OutputWriter::Plain(BufWriter::new(file)))
        }
    }

    pub fn finish(self) -> io::Result<()> {
        match self {
            OutputWriter::Plain(mut writer) => writer.flush(),
            OutputWriter::Gzip(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?;
                Ok(())
            }
        }
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputWriter::Plain(w) => w.write(buf),
            OutputWriter::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputWriter::Plain(w) => w.flush(),
            OutputWriter::Gzip(w) => w.flush(),
        }
    }
}

/// Iterator over the lines of a reader, each line keeping its terminator.
pub struct RawLines<R> {
    reader: R,
}

impl<R: BufRead> RawLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Iterator for RawLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(e) => Some(Err(e)),
        }
    }
}

/// Split a raw line into its content and its terminator (`"\r\n"`, `"\n"` or `""`).
pub fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, &line[content.len()..])
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, &line[content.len()..])
    } else {
        (line, "")
    }
}
