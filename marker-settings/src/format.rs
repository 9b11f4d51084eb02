use std::fmt;

/// Formats a millisecond duration as `[h:]mm:ss.mmm`. The hour is only shown when nonzero and is
/// not padded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Hms(pub u64);

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.0;
        let hours = ms / 3_600_000;
        let minutes = ms / 60_000 % 60;
        let seconds = ms / 1000 % 60;
        let thousandths = ms % 1000;
        if hours > 0 {
            write!(f, "{hours}:")?;
        }
        write!(f, "{minutes:02}:{seconds:02}.{thousandths:03}")
    }
}

/// Convert milliseconds to a `[h:]mm:ss.mmm` string.
#[inline]
pub fn ms_to_hms(ms: u64) -> String {
    Hms(ms).to_string()
}

/// Formats a count followed by a noun, pluralized with a trailing `s` unless the count is 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Plural<'t> {
    count: usize,
    text: &'t str,
}

impl<'t> fmt::Display for Plural<'t> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.count == 1 { "" } else { "s" };
        write!(f, "{} {}{}", self.count, self.text, suffix)
    }
}

/// Returns `"1 text"` if `count` is 1, otherwise `"{count} texts"`.
#[inline]
pub fn plural(count: usize, text: &str) -> Plural<'_> {
    Plural { count, text }
}

/// Left-pads the display form of a value with `0` up to a minimum width.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ZeroPadded<T> {
    val: T,
    width: usize,
}

impl<T: fmt::Display> fmt::Display for ZeroPadded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pad the rendered string rather than the number so non-numeric values pad the same way.
        let val = self.val.to_string();
        write!(f, "{val:0>width$}", width = self.width)
    }
}

/// Pads `0`s to the front of `val` until it is at least `width` characters long.
#[inline]
pub fn pad0<T: fmt::Display>(val: T, width: usize) -> ZeroPadded<T> {
    ZeroPadded { val, width }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hms() {
        assert_eq!(ms_to_hms(0), "00:00.000");
        assert_eq!(ms_to_hms(61_005), "01:01.005");
        assert_eq!(ms_to_hms(3_599_999), "59:59.999");
        assert_eq!(ms_to_hms(3_600_000), "1:00:00.000");
        assert_eq!(ms_to_hms(3_723_004), "1:02:03.004");
        assert_eq!(ms_to_hms(36_000_000), "10:00:00.000");
    }

    #[test]
    fn plurals() {
        assert_eq!(plural(0, "marker").to_string(), "0 markers");
        assert_eq!(plural(1, "marker").to_string(), "1 marker");
        assert_eq!(plural(2, "episode").to_string(), "2 episodes");
    }

    #[test]
    fn padding() {
        assert_eq!(pad0(7, 3).to_string(), "007");
        assert_eq!(pad0(1234, 3).to_string(), "1234");
        assert_eq!(pad0("ab", 4).to_string(), "00ab");
        assert_eq!(pad0(5, 0).to_string(), "5");
    }
}
