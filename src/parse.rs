// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parsing for the `WxH` and `re,im` pairs the command line accepts.

use num::Complex;
use std::str::FromStr;

/// Given a string and a separator, returns the two values on either
/// side of the first occurrence of the separator.
pub fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let index = s.find(separator)?;
    let left = T::from_str(&s[..index]).ok()?;
    let right = T::from_str(&s[index + separator.len_utf8()..]).ok()?;
    Some((left, right))
}

/// Parses `re,im` into a complex number.
pub fn parse_complex(s: &str) -> Option<Complex<f32>> {
    parse_pair(s, ',').map(|(re, im)| Complex::new(re, im))
}

/// Parses `WxH` into a width and height.
pub fn parse_size(s: &str) -> Option<(usize, usize)> {
    parse_pair(s, 'x')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs() {
        assert_eq!(parse_pair::<i32>("", ','), None);
        assert_eq!(parse_pair::<i32>("10,", ','), None);
        assert_eq!(parse_pair::<i32>(",10", ','), None);
        assert_eq!(parse_pair::<i32>("10,20", ','), Some((10, 20)));
        assert_eq!(parse_pair::<i32>("10,20xy", ','), None);
        assert_eq!(parse_pair::<f64>("0.5x", 'x'), None);
        assert_eq!(parse_pair::<f64>("0.5x1.5", 'x'), Some((0.5, 1.5)));
    }

    #[test]
    fn parses_sizes() {
        assert_eq!(parse_size("4x3"), Some((4, 3)));
        assert_eq!(parse_size("20000x20000"), Some((20_000, 20_000)));
        assert_eq!(parse_size("4,3"), None);
        assert_eq!(parse_size("-4x3"), None);
        assert_eq!(parse_size("lots"), None);
    }

    #[test]
    fn parses_complex_numbers() {
        assert_eq!(parse_complex("-1.5,-1.5"), Some(Complex::new(-1.5, -1.5)));
        assert_eq!(parse_complex("1.25,0"), Some(Complex::new(1.25, 0.0)));
        assert_eq!(parse_complex("1.25;0"), None);
        assert_eq!(parse_complex("i,1"), None);
    }
}
