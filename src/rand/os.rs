//! Secure source backed by the kernel CSPRNG.

use std::io;

use super::ByteSource;
use crate::error::EntropyError;

/// Cryptographically secure bytes straight from the OS.
///
/// Stateless: every `fill` is an independent syscall, so the source is safe
/// to share between threads without locking.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSource;

impl OsSource {
    pub const fn new() -> Self {
        OsSource
    }
}

impl ByteSource for OsSource {
    #[inline]
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        fill_os(buf).map_err(EntropyError::Os)
    }

    fn name(&self) -> &'static str {
        SOURCE_NAME
    }
}

// =============================================================================
// Platform backends
// =============================================================================

#[cfg(any(target_os = "linux", target_os = "android"))]
const SOURCE_NAME: &str = "getrandom";

#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
const SOURCE_NAME: &str = "/dev/urandom";

#[cfg(not(unix))]
const SOURCE_NAME: &str = "os";

#[cfg(any(target_os = "linux", target_os = "android"))]
fn fill_os(buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        let rest = &mut buf[filled..];
        let ret = unsafe { libc::getrandom(rest.as_mut_ptr().cast::<libc::c_void>(), rest.len(), 0) };
        if ret < 0 {
            let err = io::Error::last_os_error();
            // A signal interrupted the syscall; resume where it stopped.
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err);
        }
        filled += ret as usize;
    }
    Ok(())
}

#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
fn fill_os(buf: &mut [u8]) -> io::Result<()> {
    use std::fs::File;
    use std::io::Read;

    File::open("/dev/urandom")?.read_exact(buf)
}

#[cfg(not(unix))]
fn fill_os(buf: &mut [u8]) -> io::Result<()> {
    use ::rand::RngCore;

    ::rand::rngs::OsRng.try_fill_bytes(buf).map_err(io::Error::other)
}
