//! Pooled `/dev/urandom` reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zeroize::Zeroize;

use super::SecureSource;
use crate::error::{Error, Result};

pub const DEVICE: &str = "/dev/urandom";

const POOL_SIZE: usize = 4096;

/// Secure source backed by the kernel CSPRNG.
///
/// Bytes are read a pool at a time. The pool is `mlock`ed when the kernel
/// allows it and wiped before every refill and on drop.
pub struct Urandom {
    file: File,
    pool: Vec<u8>,
    pos: usize,
    locked: bool,
}

impl Urandom {
    pub fn open() -> Result<Self> {
        Self::open_path(DEVICE)
    }

    /// Open an arbitrary device path. The first pool is read eagerly so an
    /// unreadable device fails here rather than mid-password.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            tracing::error!(path = %path.display(), "failed to open random device: {e}");
            Error::RandomSourceUnavailable(e)
        })?;

        let pool = vec![0u8; POOL_SIZE];
        let locked = unsafe { libc::mlock(pool.as_ptr() as *const libc::c_void, POOL_SIZE) == 0 };
        if !locked {
            tracing::warn!("mlock failed - random pool may be swapped to disk");
        }

        let mut source = Self {
            file,
            pool,
            pos: POOL_SIZE,
            locked,
        };
        source.refill()?;
        Ok(source)
    }

    fn refill(&mut self) -> Result<()> {
        self.pool[..].zeroize();
        self.pos = POOL_SIZE;
        self.file.read_exact(&mut self.pool).map_err(|e| {
            tracing::error!("failed to read random device: {e}");
            Error::RandomSourceUnavailable(e)
        })?;
        self.pos = 0;
        Ok(())
    }
}

impl SecureSource for Urandom {
    fn next_u32(&mut self) -> Result<u32> {
        if self.pos + 4 > POOL_SIZE {
            self.refill()?;
        }
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.pool[self.pos..self.pos + 4]);
        self.pool[self.pos..self.pos + 4].zeroize();
        self.pos += 4;
        Ok(u32::from_le_bytes(bytes))
    }
}

impl Drop for Urandom {
    fn drop(&mut self) {
        self.pool[..].zeroize();
        if self.locked {
            unsafe { libc::munlock(self.pool.as_ptr() as *const libc::c_void, POOL_SIZE) };
        }
    }
}
