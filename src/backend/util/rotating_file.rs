//! Size-rotated log file usable as a `tracing_subscriber` writer.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use tracing_subscriber::fmt::MakeWriter;

/// Append-only file that rolls over to `<name>.1`, `<name>.2`, ... once it
/// would grow past `max_bytes`. At most `backups` old files are kept.
#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    state: Mutex<State>,
}

#[derive(Debug)]
struct State {
    file: File,
    size: u64,
}

impl RotatingFile {
    pub fn new(path: impl Into<PathBuf>, max_bytes: u64, backups: usize) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = open_append(&path)?;
        let size = file.metadata()?.len();

        Ok(Self {
            path,
            max_bytes,
            backups,
            state: Mutex::new(State { file, size }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn rotate(&self, state: &mut State) -> io::Result<()> {
        state.file.flush()?;

        if self.backups == 0 {
            state.file = File::create(&self.path)?;
            state.size = 0;
            return Ok(());
        }

        let oldest = self.backup_path(self.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for index in (1..self.backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }

        fs::rename(&self.path, self.backup_path(1))?;

        state.file = open_append(&self.path)?;
        state.size = 0;

        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panic while holding the lock leaves the state usable
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_record(&self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.lock();

        if state.size > 0 && state.size + buf.len() as u64 > self.max_bytes {
            self.rotate(&mut state)?;
        }

        state.file.write_all(buf)?;
        state.size += buf.len() as u64;

        Ok(buf.len())
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Handle handed out per event by [`RotatingFile`]'s [`MakeWriter`] impl.
pub struct RotatingWriter<'a> {
    file: &'a RotatingFile,
}

impl Write for RotatingWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_record(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.lock().file.flush()
    }
}

impl<'a> MakeWriter<'a> for RotatingFile {
    type Writer = RotatingWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        RotatingWriter { file: self }
    }
}
