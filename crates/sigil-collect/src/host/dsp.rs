//! Offline audio rendering: oscillator through a dynamics compressor.
//!
//! Pure f64 math; the same graph renders the same buffer on every run of
//! this code.

use super::{AudioGraphSpec, CompressorSpec, Waveform};

/// Render the graph and return the sample buffer.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn render(spec: &AudioGraphSpec) -> Vec<f32> {
    let sample_rate = f64::from(spec.sample_rate);
    let step = spec.oscillator.frequency_hz / sample_rate;

    let attack = coefficient(spec.compressor.attack_s, sample_rate);
    let release = coefficient(spec.compressor.release_s, sample_rate);

    let mut out = Vec::with_capacity(spec.frames as usize);
    let mut phase = 0.0f64;
    let mut gain_db = 0.0f64;

    for _ in 0..spec.frames {
        let x = sample(spec.oscillator.waveform, phase);
        phase = (phase + step).fract();

        let level_db = 20.0 * x.abs().max(1e-6).log10();
        let target = reduction_db(&spec.compressor, level_db);

        // Attack while reducing further, release while recovering
        let coeff = if target < gain_db { attack } else { release };
        gain_db = target + coeff * (gain_db - target);

        out.push((x * 10f64.powf(gain_db / 20.0)) as f32);
    }
    out
}

/// One-pole smoothing coefficient for a time constant
fn coefficient(seconds: f64, sample_rate: f64) -> f64 {
    if seconds <= 0.0 {
        0.0
    } else {
        (-1.0 / (sample_rate * seconds)).exp()
    }
}

/// Static gain reduction in dB for an input level, soft knee
fn reduction_db(c: &CompressorSpec, level_db: f64) -> f64 {
    let over = level_db - c.threshold_db;
    let slope = 1.0 - 1.0 / c.ratio;

    if c.knee_db > 0.0 && 2.0 * over.abs() <= c.knee_db {
        let t = over + c.knee_db / 2.0;
        -(t * t) / (2.0 * c.knee_db) * slope
    } else if over > 0.0 {
        -over * slope
    } else {
        0.0
    }
}

/// One oscillator sample for a phase in [0, 1)
fn sample(waveform: Waveform, phase: f64) -> f64 {
    match waveform {
        Waveform::Sine => (std::f64::consts::TAU * phase).sin(),
        Waveform::Square => {
            if phase < 0.5 {
                1.0
            } else {
                -1.0
            }
        }
        Waveform::Sawtooth => 2.0 * phase - 1.0,
        Waveform::Triangle => {
            if phase < 0.25 {
                4.0 * phase
            } else if phase < 0.75 {
                2.0 - 4.0 * phase
            } else {
                4.0 * phase - 4.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_deterministic() {
        let spec = AudioGraphSpec::fingerprint();
        assert_eq!(render(&spec), render(&spec));
    }

    #[test]
    fn render_produces_signal() {
        let spec = AudioGraphSpec::fingerprint();
        let buf = render(&spec);
        assert_eq!(buf.len(), 44_100);

        let sum: f64 = buf.iter().map(|s| f64::from(s.abs())).sum();
        assert!(sum > 0.0);
    }

    #[test]
    fn triangle_shape() {
        assert!((sample(Waveform::Triangle, 0.0)).abs() < f64::EPSILON);
        assert!((sample(Waveform::Triangle, 0.25) - 1.0).abs() < f64::EPSILON);
        assert!((sample(Waveform::Triangle, 0.75) + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn compressor_reduces_loud_signal() {
        let spec = AudioGraphSpec::fingerprint();
        let compressed = render(&spec);

        let mut uncompressed = spec;
        uncompressed.compressor.ratio = 1.0;
        let raw = render(&uncompressed);

        let energy = |buf: &[f32]| -> f64 { buf.iter().map(|s| f64::from(s.abs())).sum() };
        assert!(energy(&compressed) < energy(&raw));
    }
}
