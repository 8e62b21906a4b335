//! RNG test binary - streams source output to stdout for statistical testing.
//!
//! Usage:
//!   ./rng_test                # Secure OS source
//!   ./rng_test --fast         # xoshiro256++ source
//!   ./rng_test --fast --seed 7
//!   ./rng_test --chars        # Mapped characters of the default alphabet
//!
//! Pipe to test suites:
//!   ./rng_test | dieharder -a -g 200
//!   ./rng_test | RNG_test stdin -tlmax 1TB

use std::io::{self, Write};

use quotapass::rand::FastSource;
use quotapass::{Alphabet, ByteSource, EntropyMode, Sampler};

fn print_help() {
    eprintln!("Usage: rng_test [OPTIONS]");
    eprintln!();
    eprintln!("Streams random bytes to stdout for statistical testing.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -f, --fast       Use the xoshiro256++ source instead of the OS");
    eprintln!("  -s, --seed <N>   Seed the fast source (implies --fast)");
    eprintln!("  -c, --chars      Emit 64-char lines of the default alphabet");
    eprintln!("  -h, --help       Show this help");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  rng_test | dieharder -a -g 200");
    eprintln!("  rng_test -f | RNG_test stdin -tlmax 1TB");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        std::process::exit(0);
    }

    let seed = match args.iter().position(|a| a == "--seed" || a == "-s") {
        Some(i) => match args.get(i + 1).and_then(|s| s.parse::<u64>().ok()) {
            Some(seed) => Some(seed),
            None => {
                eprintln!("--seed needs an unsigned integer");
                std::process::exit(2);
            }
        },
        None => None,
    };
    let fast = seed.is_some() || args.iter().any(|a| a == "--fast" || a == "-f");
    let chars = args.iter().any(|a| a == "--chars" || a == "-c");

    let seeded = seed.map(FastSource::with_seed);
    let source: &dyn ByteSource = match &seeded {
        Some(source) => source,
        None if fast => EntropyMode::Fast.source(),
        None => EntropyMode::Secure.source(),
    };
    eprintln!("rng_test: streaming from {}", source.name());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if chars {
        stream_chars(source, &mut out)
    } else {
        stream_bytes(source, &mut out)
    };

    if let Err(e) = result {
        eprintln!("rng_test: {e}");
        std::process::exit(1);
    }
}

/// Runs until the reader hangs up.
fn stream_bytes(source: &dyn ByteSource, out: &mut impl Write) -> Result<(), quotapass::SampleError> {
    let mut buf = [0u8; 8192];
    loop {
        source.fill(&mut buf)?;
        if out.write_all(&buf).is_err() {
            return Ok(());
        }
    }
}

fn stream_chars(source: &dyn ByteSource, out: &mut impl Write) -> Result<(), quotapass::SampleError> {
    let alphabet = Alphabet::default();
    let sampler = Sampler::new(&alphabet, source);
    loop {
        match sampler.generate_batch(64, 0, 128, out) {
            Err(quotapass::SampleError::Write(_)) => return Ok(()),
            other => other?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotapass::rand::ReplaySource;
    use quotapass::{EntropyError, SampleError};

    /// Accepts `budget` bytes, then behaves like a closed pipe.
    struct HangsUp {
        budget: usize,
        taken: Vec<u8>,
    }

    impl Write for HangsUp {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::ErrorKind::BrokenPipe.into());
            }
            let n = buf.len().min(self.budget);
            self.taken.extend_from_slice(&buf[..n]);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn hangs_up_after(budget: usize) -> HangsUp {
        HangsUp {
            budget,
            taken: Vec::new(),
        }
    }

    #[test]
    fn test_both_modes_stop_cleanly_on_hangup() {
        let source = FastSource::with_seed(21);

        let mut out = hangs_up_after(20_000);
        assert!(stream_bytes(&source, &mut out).is_ok());
        assert_eq!(out.taken.len(), 20_000);

        let mut out = hangs_up_after(20_000);
        assert!(stream_chars(&source, &mut out).is_ok());
        assert_eq!(out.taken.len(), 20_000);
        let alphabet = Alphabet::default();
        assert!(out.taken.iter().all(|&b| b == b'\n' || alphabet.contains(b)));
    }

    #[test]
    fn test_both_modes_report_entropy_failure() {
        let source = ReplaySource::once(Vec::new());

        let mut out = hangs_up_after(usize::MAX);
        assert!(matches!(
            stream_bytes(&source, &mut out),
            Err(SampleError::Entropy(EntropyError::Exhausted { .. }))
        ));
        assert!(matches!(
            stream_chars(&source, &mut out),
            Err(SampleError::Entropy(EntropyError::Exhausted { .. }))
        ));
        assert!(out.taken.is_empty());
    }
}
