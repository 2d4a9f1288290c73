use std::f64::consts::PI;

use crate::foundation::core::Point;
use crate::foundation::error::{CycloError, CycloResult};
use crate::spectrum::path::SampledPath;

/// One frequency component of the truncated transform.
///
/// `re`/`im` are the raw normalized DFT sums at bin `freq`; `amp` and `phase`
/// are their polar form. `freq` is the original one-sided bin index and is
/// never renumbered, even after the amplitude sort.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coefficient {
    /// Real part of the normalized DFT sum.
    pub re: f64,
    /// Imaginary part of the normalized DFT sum.
    pub im: f64,
    /// One-sided frequency bin index (the `k` the sum was evaluated at).
    pub freq: u32,
    /// Magnitude, `sqrt(re^2 + im^2)`.
    pub amp: f64,
    /// Angle, `atan2(im, re)`.
    pub phase: f64,
}

impl Coefficient {
    fn from_sum(re: f64, im: f64, freq: u32) -> Self {
        Self {
            re,
            im,
            freq,
            amp: re.hypot(im),
            phase: im.atan2(re),
        }
    }
}

/// Ranked coefficient set produced by [`Spectrum::compute`].
///
/// Coefficients are held in amplitude-descending order (stable sort, so equal
/// amplitudes keep ascending bin order). The set is read-only after
/// computation and may be shared by value with the animator. Deserialization
/// re-validates the invariants, so a decoded spectrum is as trustworthy as a
/// computed one.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawSpectrum")]
pub struct Spectrum {
    coefficients: Vec<Coefficient>,
    path_len: usize,
}

/// Unvalidated wire form of [`Spectrum`].
#[derive(serde::Deserialize)]
struct RawSpectrum {
    coefficients: Vec<Coefficient>,
    path_len: usize,
}

impl TryFrom<RawSpectrum> for Spectrum {
    type Error = CycloError;

    fn try_from(raw: RawSpectrum) -> CycloResult<Self> {
        if raw.path_len == 0 {
            return Err(CycloError::validation(
                "spectrum path_len must be >= 1 (a spectrum always comes from a non-empty path)",
            ));
        }
        if raw.coefficients.is_empty() {
            return Err(CycloError::validation(
                "spectrum must hold at least one coefficient",
            ));
        }
        if raw
            .coefficients
            .windows(2)
            .any(|pair| pair[0].amp < pair[1].amp)
        {
            return Err(CycloError::validation(
                "spectrum coefficients must be in amplitude-descending order",
            ));
        }
        Ok(Self {
            coefficients: raw.coefficients,
            path_len: raw.path_len,
        })
    }
}

impl Spectrum {
    /// Forward DFT of `path` translated against `origin`, evaluated at the
    /// one-sided integer frequencies `0..num_coefficients` and normalized by
    /// `1/N`.
    ///
    /// This is deliberately *not* a centered spectrum: only non-negative bins
    /// are computed, matching the reconstruction the animator performs.
    /// `num_coefficients > N` is accepted; bins beyond what the sample can
    /// resolve simply alias.
    ///
    /// O(K·N) time, O(K) extra space. K is expected to be small (tens).
    #[tracing::instrument(skip(path, origin), fields(n = path.len(), k = num_coefficients))]
    pub fn compute(
        path: &SampledPath,
        num_coefficients: usize,
        origin: Point,
    ) -> CycloResult<Self> {
        if num_coefficients == 0 {
            return Err(CycloError::validation("coefficient count must be >= 1"));
        }
        let n = path.len();
        let samples: Vec<_> = path.centered(origin).collect();

        let mut coefficients = Vec::with_capacity(num_coefficients);
        for k in 0..num_coefficients {
            let mut sum_re = 0.0;
            let mut sum_im = 0.0;
            for (i, s) in samples.iter().enumerate() {
                let phi = 2.0 * PI * (k as f64) * (i as f64) / (n as f64);
                let (sin_phi, cos_phi) = phi.sin_cos();
                sum_re += s.x * cos_phi + s.y * sin_phi;
                sum_im += -s.x * sin_phi + s.y * cos_phi;
            }
            let freq = u32::try_from(k)
                .map_err(|_| CycloError::validation("coefficient count exceeds u32 bins"))?;
            coefficients.push(Coefficient::from_sum(
                sum_re / (n as f64),
                sum_im / (n as f64),
                freq,
            ));
        }

        // sort_by is stable: equal amplitudes keep ascending bin order.
        coefficients.sort_by(|a, b| b.amp.total_cmp(&a.amp));

        Ok(Self {
            coefficients,
            path_len: n,
        })
    }

    /// Coefficients in amplitude-descending order.
    pub fn coefficients(&self) -> &[Coefficient] {
        &self.coefficients
    }

    /// Number of coefficients K.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Always false: computation yields at least one coefficient.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Sample count N of the path the spectrum was computed from. The
    /// animation's frame count and time step derive from this, not from K.
    pub fn path_len(&self) -> usize {
        self.path_len
    }

    /// Sum of all amplitudes: the unscaled total reach of the epicycle chain.
    pub fn radius_sum(&self) -> f64 {
        self.coefficients.iter().map(|c| c.amp).sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spectrum/dft.rs"]
mod tests;
