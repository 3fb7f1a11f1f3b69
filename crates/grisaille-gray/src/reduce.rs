//! Per-pixel RGB-to-gray reduction
//!
//! Maps one RGB sample and a [`GrayMethod`] to a single intensity
//! value. Every average uses truncating integer division, and the
//! `Highest` tie-break resolves to the red channel; both behaviors
//! are load-bearing compatibility contracts, see the individual
//! method notes.

use crate::method::GrayMethod;

/// Reduce one RGB sample to a gray intensity.
///
/// Total function: every `u8` triple maps to a value in [0, 255].
///
/// Method semantics:
/// - `Average`: `(r + g + b) / 3`, truncating.
/// - `Highest`: the channel strictly greater than both others. When
///   no channel is strictly greatest (a pairwise or three-way tie),
///   the result is `r` regardless of which channels tied. A sample
///   like (5, 9, 9) therefore reduces to 5, not 9.
/// - `UpperAverage`: mean of the two largest channels, truncating.
/// - `MiddleAverage`: mean of the largest and smallest channels,
///   truncating. The middle channel is excluded.
///
/// # Examples
///
/// ```
/// use grisaille_gray::{GrayMethod, reduce_rgb};
///
/// assert_eq!(reduce_rgb(30, 60, 90, GrayMethod::Average), 60);
/// assert_eq!(reduce_rgb(30, 60, 90, GrayMethod::Highest), 90);
/// assert_eq!(reduce_rgb(30, 60, 90, GrayMethod::UpperAverage), 75);
/// assert_eq!(reduce_rgb(30, 60, 90, GrayMethod::MiddleAverage), 60);
/// ```
#[inline]
pub fn reduce_rgb(r: u8, g: u8, b: u8, method: GrayMethod) -> u8 {
    match method {
        GrayMethod::Average => ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8,
        GrayMethod::Highest => {
            if r > g && r > b {
                r
            } else if g > r && g > b {
                g
            } else if b > r && b > g {
                b
            } else {
                // No strict maximum: ties default to red
                r
            }
        }
        GrayMethod::UpperAverage => {
            let v = sorted_desc(r, g, b);
            ((u16::from(v[0]) + u16::from(v[1])) / 2) as u8
        }
        GrayMethod::MiddleAverage => {
            let v = sorted_desc(r, g, b);
            ((u16::from(v[0]) + u16::from(v[2])) / 2) as u8
        }
    }
}

/// Sort a channel triple in descending order.
#[inline]
fn sorted_desc(r: u8, g: u8, b: u8) -> [u8; 3] {
    let mut v = [r, g, b];
    v.sort_unstable();
    v.reverse();
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_truncates() {
        assert_eq!(reduce_rgb(200, 10, 10, GrayMethod::Average), 73);
        assert_eq!(reduce_rgb(10, 10, 10, GrayMethod::Average), 10);
        // (1 + 1 + 0) / 3 = 0, not rounded up
        assert_eq!(reduce_rgb(1, 1, 0, GrayMethod::Average), 0);
        assert_eq!(reduce_rgb(255, 255, 255, GrayMethod::Average), 255);
    }

    #[test]
    fn test_highest_strict_maximum() {
        assert_eq!(reduce_rgb(90, 60, 30, GrayMethod::Highest), 90);
        assert_eq!(reduce_rgb(30, 90, 60, GrayMethod::Highest), 90);
        assert_eq!(reduce_rgb(30, 60, 90, GrayMethod::Highest), 90);
    }

    #[test]
    fn test_highest_three_way_tie() {
        assert_eq!(reduce_rgb(10, 10, 10, GrayMethod::Highest), 10);
    }

    #[test]
    fn test_highest_pairwise_tie_defaults_to_red() {
        // g and b tie as the maximum, but the tie-break returns r
        assert_eq!(reduce_rgb(5, 9, 9, GrayMethod::Highest), 5);
        // r ties with the maximum: still r, harmlessly
        assert_eq!(reduce_rgb(9, 9, 5, GrayMethod::Highest), 9);
        assert_eq!(reduce_rgb(9, 5, 9, GrayMethod::Highest), 9);
    }

    #[test]
    fn test_upper_average() {
        // sorted desc [90, 60, 30]: (90 + 60) / 2 = 75
        assert_eq!(reduce_rgb(30, 60, 90, GrayMethod::UpperAverage), 75);
        // (91 + 60) / 2 = 75 truncating
        assert_eq!(reduce_rgb(30, 60, 91, GrayMethod::UpperAverage), 75);
        assert_eq!(reduce_rgb(7, 7, 7, GrayMethod::UpperAverage), 7);
    }

    #[test]
    fn test_middle_average_excludes_middle() {
        // sorted desc [90, 60, 30]: (90 + 30) / 2 = 60
        assert_eq!(reduce_rgb(30, 60, 90, GrayMethod::MiddleAverage), 60);
        // middle value has no effect
        assert_eq!(
            reduce_rgb(30, 31, 90, GrayMethod::MiddleAverage),
            reduce_rgb(30, 89, 90, GrayMethod::MiddleAverage)
        );
        // (255 + 0) / 2 = 127 truncating
        assert_eq!(reduce_rgb(0, 128, 255, GrayMethod::MiddleAverage), 127);
    }

    #[test]
    fn test_all_methods_bounded_by_max_channel() {
        let samples = [(0, 0, 0), (255, 0, 0), (13, 200, 77), (255, 255, 255)];
        for (r, g, b) in samples {
            let max = r.max(g).max(b);
            for method in GrayMethod::ALL {
                assert!(reduce_rgb(r, g, b, method) <= max);
            }
        }
    }
}
