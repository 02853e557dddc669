use super::*;
use std::fmt;

/// Upper bound on the length of formatted duration text.
///
/// The longest text, such as `PT-2562047788015215H-30M-7.999999999S`, stays
/// below 40 bytes.
pub const MAX_FORMATTED_LEN: usize = 48;

impl Duration {
    /// Writes the canonical text of this duration into `bytes`, returning the
    /// number of bytes written.
    ///
    /// The text has the form `PT{hours}H{minutes}M{seconds}.{fraction}S`.
    /// Hours and minutes appear only when nonzero, and the seconds are
    /// omitted when they and the fraction are both zero and something was
    /// already written. Days are folded into hours. The fraction uses the
    /// fewest digits that represent it exactly.
    ///
    /// Negative durations carry the sign on every component that is written:
    /// `-90.5s` is `PT-1M-30.5S`. A negative duration below one second in
    /// magnitude is written as `PT-0.{fraction}S`.
    ///
    /// Fails with an invalid argument error when `bytes` is shorter than
    /// [`MAX_FORMATTED_LEN`].
    ///
    /// ```
    /// # use chronon_duration::{Duration, MAX_FORMATTED_LEN};
    /// let d = Duration::of_seconds_nanos(-60, 100_000_000).unwrap();
    /// let mut buffer = [0u8; MAX_FORMATTED_LEN];
    /// let len = d.format_to_buffer(&mut buffer).unwrap();
    /// assert_eq!(&buffer[..len], b"PT-59.9S");
    /// ```
    pub fn format_to_buffer(&self, bytes: &mut [u8]) -> Result<usize> {
        if bytes.len() < MAX_FORMATTED_LEN {
            return Err(Error::invalid_arg(
                "bytes",
                format!(
                    "buffer holds {} bytes, formatting needs {MAX_FORMATTED_LEN}",
                    bytes.len()
                ),
            ));
        }

        let mut sb = AsciiBuilder::new(bytes);
        sb.append_bytes(b"PT")?;
        if self.is_zero() {
            sb.append_bytes(b"0S")?;
            return Ok(sb.len());
        }

        let seconds = self.seconds();
        let nanos = self.nanos();
        // A negative value with a fraction is one second closer to zero in
        // whole seconds; the fraction is then written as its complement.
        let borrows = seconds < 0 && nanos > 0;
        let total_seconds = if borrows { seconds + 1 } else { seconds };

        let hours = total_seconds / SECONDS_PER_HOUR;
        let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        let secs = total_seconds % SECONDS_PER_MINUTE;

        if hours != 0 {
            sb.append_i64(hours)?;
            sb.append_byte(b'H')?;
        }
        if minutes != 0 {
            sb.append_i64(minutes)?;
            sb.append_byte(b'M')?;
        }
        if secs == 0 && nanos == 0 && sb.len() > 2 {
            return Ok(sb.len());
        }

        if borrows && secs == 0 {
            sb.append_bytes(b"-0")?;
        } else {
            sb.append_i64(secs)?;
        }
        if nanos > 0 {
            let fraction = if seconds < 0 {
                NANOS_PER_SECOND - nanos as i64
            } else {
                nanos as i64
            };
            sb.append_byte(b'.')?;
            sb.append_padded(fraction, 9)?;
            sb.trim_trailing(b'0');
        }
        sb.append_byte(b'S')?;
        Ok(sb.len())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; MAX_FORMATTED_LEN];
        let len = self.format_to_buffer(&mut buf).map_err(|_| fmt::Error)?;
        let s = std::str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?;
        f.write_str(s)
    }
}

/// Appends ASCII text and integers to a fixed buffer.
struct AsciiBuilder<'a> {
    buffer: &'a mut [u8],
    position: usize,
}

impl<'a> AsciiBuilder<'a> {
    fn new(buffer: &'a mut [u8]) -> AsciiBuilder<'a> {
        AsciiBuilder {
            buffer,
            position: 0,
        }
    }

    fn len(&self) -> usize {
        self.position
    }

    fn reserve(&self, required: usize) -> Result<()> {
        if self.position + required > self.buffer.len() {
            return Err(Error::invalid_arg(
                "buffer",
                format!(
                    "buffer is too small: empty space = {}, required space = {required}",
                    self.buffer.len() - self.position
                ),
            ));
        }
        Ok(())
    }

    fn append_byte(&mut self, b: u8) -> Result<()> {
        self.reserve(1)?;
        self.buffer[self.position] = b;
        self.position += 1;
        Ok(())
    }

    fn append_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.reserve(bytes.len())?;
        self.buffer[self.position..self.position + bytes.len()].copy_from_slice(bytes);
        self.position += bytes.len();
        Ok(())
    }

    fn append_i64(&mut self, value: i64) -> Result<()> {
        let mut buffer = itoa::Buffer::new();
        self.append_bytes(buffer.format(value).as_bytes())
    }

    /// Appends a non-negative `value` as exactly `digits` digits, padded with
    /// leading zeros.
    fn append_padded(&mut self, value: i64, digits: usize) -> Result<()> {
        let mut buffer = itoa::Buffer::new();
        let s = buffer.format(value).as_bytes();
        if value < 0 || s.len() > digits {
            return Err(Error::invalid_arg(
                "value",
                format!("expected a number of {digits} digits but received {value}"),
            ));
        }
        self.reserve(digits)?;
        let padding = digits - s.len();
        self.buffer[self.position..self.position + padding].fill(b'0');
        self.position += padding;
        self.append_bytes(s)
    }

    /// Drops trailing `b` bytes from the written text.
    fn trim_trailing(&mut self, b: u8) {
        while self.position > 0 && self.buffer[self.position - 1] == b {
            self.position -= 1;
        }
    }
}
