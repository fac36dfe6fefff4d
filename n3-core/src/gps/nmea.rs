//! Minimal NMEA 0183 reader
//!
//! Only GGA sentences are used: they carry fix quality, satellite count,
//! HDOP, position and altitude in one line. Everything else is skipped.

use heapless::Vec;

use super::{Fix, FixQuality, Position};

/// Longest sentence the standard allows, plus CR LF
const MAX_SENTENCE: usize = 84;

/// Collects UART bytes into complete sentences
pub struct LineBuffer {
    buf: Vec<u8, MAX_SENTENCE>,
    complete: bool,
    overflowed: bool,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            complete: false,
            overflowed: false,
        }
    }

    /// Feed one byte; returns the sentence when `byte` ends it
    pub fn push(&mut self, byte: u8) -> Option<&str> {
        if self.complete {
            self.buf.clear();
            self.complete = false;
        }

        match byte {
            b'$' => {
                self.buf.clear();
                self.overflowed = false;
                self.buf.push(byte).ok();
                None
            }
            b'\r' => None,
            b'\n' => {
                self.complete = true;
                if self.overflowed || self.buf.is_empty() {
                    self.overflowed = false;
                    return None;
                }
                core::str::from_utf8(&self.buf).ok()
            }
            _ => {
                if self.buf.push(byte).is_err() {
                    self.overflowed = true;
                }
                None
            }
        }
    }
}

/// Check the `*hh` XOR checksum; sentences without one are rejected
fn checksum_ok(sentence: &str) -> Option<&str> {
    let body = sentence.strip_prefix('$')?;
    let (payload, sum) = body.split_once('*')?;
    let expected = u8::from_str_radix(sum.get(..2)?, 16).ok()?;
    let actual = payload.bytes().fold(0u8, |acc, b| acc ^ b);
    (actual == expected).then_some(payload)
}

/// `ddmm.mmmm` / `dddmm.mmmm` plus hemisphere to signed degrees
fn coordinate(value: &str, hemisphere: &str) -> Option<f64> {
    let raw: f64 = value.parse().ok()?;
    let degrees = (raw / 100.0) as u32 as f64;
    let minutes = raw - degrees * 100.0;
    let unsigned = degrees + minutes / 60.0;
    match hemisphere {
        "N" | "E" => Some(unsigned),
        "S" | "W" => Some(-unsigned),
        _ => None,
    }
}

/// Parse a GGA sentence from any talker
///
/// GGA has no 2D/3D flag; a valid fix reporting an altitude counts as 3D.
pub fn parse_gga(sentence: &str) -> Option<Fix> {
    let payload = checksum_ok(sentence)?;
    let mut fields = payload.split(',');

    let kind = fields.next()?;
    if kind.len() != 5 || !kind.ends_with("GGA") {
        return None;
    }

    let _time = fields.next()?;
    let lat = fields.next()?;
    let ns = fields.next()?;
    let lon = fields.next()?;
    let ew = fields.next()?;
    let quality: u8 = fields.next()?.parse().unwrap_or(0);
    let satellites: u8 = fields.next()?.parse().unwrap_or(0);
    let hdop: f32 = fields.next()?.parse().unwrap_or(Fix::NONE.hdop);
    let altitude: Option<f64> = fields.next()?.parse().ok();

    if quality == 0 {
        return Some(Fix {
            satellites,
            ..Fix::NONE
        });
    }

    let position = Position::new(coordinate(lat, ns)?, coordinate(lon, ew)?);
    Some(Fix {
        quality: if altitude.is_some() {
            FixQuality::Fix3d
        } else {
            FixQuality::Fix2d
        },
        hdop,
        satellites,
        position,
        altitude_msl_m: altitude.unwrap_or(0.0),
    })
}
