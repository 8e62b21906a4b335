//! Entropy and rejection-cost arithmetic.

/// Expected attempts above which a configuration is reported as improbable.
pub const WARN_EXPECTED_ATTEMPTS: f64 = 1e4;

/// Bits of entropy in `length` uniform draws from `alphabet_len` characters.
pub fn bits(length: usize, alphabet_len: usize) -> f64 {
    if alphabet_len == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_len as f64).log2()
}

pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

/// Tail terms this far below the largest one, in natural log, are dropped.
const NEGLIGIBLE_LN: f64 = 40.0;

/// `P(X >= min_special)` for `X ~ Binomial(length, p)`.
///
/// Summed in log space so long passwords with rare specials do not
/// underflow to zero term by term. Only the shorter side of the
/// distribution is walked and nothing is buffered.
pub fn acceptance_probability(length: usize, min_special: usize, p: f64) -> f64 {
    if min_special == 0 {
        return 1.0;
    }
    if min_special > length || p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }

    let n = length as f64;
    let (ln_p, ln_q) = (p.ln(), (1.0 - p).ln());
    // ln pmf(k + 1) - ln pmf(k), valid for k < length
    let step = |k: usize| (n - k as f64).ln() - (k as f64 + 1.0).ln() + ln_p - ln_q;

    let mut ln_pmf = n * ln_q;

    if min_special as f64 <= n * p {
        let mut below = LogSum::new();
        for k in 0..min_special {
            below.add(ln_pmf);
            ln_pmf += step(k);
        }
        return (1.0 - below.value()).clamp(0.0, 1.0);
    }

    for k in 0..min_special {
        ln_pmf += step(k);
    }
    // Past the mean every further term is smaller than the last
    let mut tail = LogSum::new();
    for k in min_special..=length {
        tail.add(ln_pmf);
        if ln_pmf < tail.max - NEGLIGIBLE_LN || k == length {
            break;
        }
        ln_pmf += step(k);
    }
    tail.value().min(1.0)
}

/// Running log-sum-exp.
struct LogSum {
    max: f64,
    scaled: f64,
}

impl LogSum {
    fn new() -> Self {
        Self {
            max: f64::NEG_INFINITY,
            scaled: 0.0,
        }
    }

    fn add(&mut self, ln_term: f64) {
        if ln_term > self.max {
            self.scaled = self.scaled * (self.max - ln_term).exp() + 1.0;
            self.max = ln_term;
        } else {
            self.scaled += (ln_term - self.max).exp();
        }
    }

    fn value(&self) -> f64 {
        self.max.exp() * self.scaled
    }
}

/// Mean number of whole-sample draws until one meets the quota.
///
/// Infinite when the quota can never be met.
pub fn expected_attempts(length: usize, min_special: usize, p: f64) -> f64 {
    let accept = acceptance_probability(length, min_special, p);
    if accept <= 0.0 {
        f64::INFINITY
    } else {
        1.0 / accept
    }
}
