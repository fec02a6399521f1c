//! This module owns the boundary between the textual record stream and the
//! four typed channel sequences, including the quantization policy.
//!
//! A record is four pipe-separated fields `time_delta|x|y|input_state`, and
//! records are comma-separated with a trailing comma after every record.
//! Positions are scaled by 16 and rounded so they fit signed 16-bit storage
//! while keeping 1/16-unit precision; coordinates beyond that range are
//! saturated to the boundary, a deliberate lossy policy for off-screen
//! cursor positions rather than an error. Only the low byte of the input
//! state carries meaning and it is masked at parse time.

use crate::error::TracepackError;

/// Fixed quantization factor for the position channels.
pub const POSITION_SCALE: f64 = 16.0;

/// The four per-record channel sequences, all of equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channels {
    pub time_deltas: Vec<i32>,
    pub xs: Vec<i16>,
    pub ys: Vec<i16>,
    pub keys: Vec<u8>,
}

impl Channels {
    /// Number of records represented.
    pub fn len(&self) -> usize {
        self.time_deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_deltas.is_empty()
    }
}

//==================================================================================
// 1. Quantization
//==================================================================================

/// Scales a position to 1/16-unit resolution and saturates it into the
/// signed 16-bit range.
fn quantize_position(value: f64) -> Result<i16, TracepackError> {
    if !value.is_finite() {
        return Err(TracepackError::MalformedInput(format!(
            "position value '{}' is not a finite number",
            value
        )));
    }
    let scaled = (value * POSITION_SCALE).round();
    if scaled <= f64::from(i16::MIN) {
        Ok(i16::MIN)
    } else if scaled >= f64::from(i16::MAX) {
        Ok(i16::MAX)
    } else {
        Ok(scaled as i16)
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Splits the textual record stream into its four channel sequences.
///
/// Degenerate empty records (nothing between delimiters) are skipped without
/// affecting the indices of kept records.
pub fn split(text: &str) -> Result<Channels, TracepackError> {
    let mut channels = Channels::default();

    for record in text.split(',') {
        if record.is_empty() {
            continue;
        }
        let fields: Vec<&str> = record.split('|').collect();
        if fields.len() != 4 {
            return Err(TracepackError::MalformedInput(format!(
                "record '{}' has {} fields, expected 4",
                record,
                fields.len()
            )));
        }

        let time_delta: i32 = fields[0].parse().map_err(|_| {
            TracepackError::MalformedInput(format!(
                "time delta '{}' is not a 32-bit integer",
                fields[0]
            ))
        })?;
        let x: f64 = fields[1].parse().map_err(|_| {
            TracepackError::MalformedInput(format!("x position '{}' is not a number", fields[1]))
        })?;
        let y: f64 = fields[2].parse().map_err(|_| {
            TracepackError::MalformedInput(format!("y position '{}' is not a number", fields[2]))
        })?;
        let state: i64 = fields[3].parse().map_err(|_| {
            TracepackError::MalformedInput(format!(
                "input state '{}' is not an integer",
                fields[3]
            ))
        })?;

        channels.time_deltas.push(time_delta);
        channels.xs.push(quantize_position(x)?);
        channels.ys.push(quantize_position(y)?);
        // Everything meaningful in the input state lives in the low byte.
        channels.keys.push((state & 0xFF) as u8);
    }

    Ok(channels)
}

/// Reassembles the textual record stream from the four channel sequences,
/// trailing delimiter included after every record.
///
/// The quantized positions are divided back by the scale factor; the original
/// sub-1/16 precision is gone by design. All four channels must be the same
/// length or the container was desynchronized.
pub fn join(channels: &Channels) -> Result<String, TracepackError> {
    let n = channels.time_deltas.len();
    if channels.xs.len() != n || channels.ys.len() != n || channels.keys.len() != n {
        return Err(TracepackError::ChannelLengthMismatch(format!(
            "time={} x={} y={} state={}",
            n,
            channels.xs.len(),
            channels.ys.len(),
            channels.keys.len()
        )));
    }

    let mut out = String::with_capacity(n * 16);
    for i in 0..n {
        let x = f64::from(channels.xs[i]) / POSITION_SCALE;
        let y = f64::from(channels.ys[i]) / POSITION_SCALE;
        out.push_str(&format!(
            "{}|{}|{}|{},",
            channels.time_deltas[i], x, y, channels.keys[i]
        ));
    }
    Ok(out)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
