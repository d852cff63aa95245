#![forbid(unsafe_code)]

//! Content-box arithmetic for host measurement.
//!
//! The grid solver wants the host's rendered content width. `clientWidth` is
//! the padding box (no borders, no scrollbar) regardless of `box-sizing`, so
//! the content width is always `clientWidth` minus the two horizontal
//! paddings; reading computed `width` instead would hand back the border-box
//! width on `box-sizing: border-box` hosts.

/// Content width in px from `clientWidth` and the computed paddings.
#[must_use]
pub fn content_width(client_width: f64, padding_left: f64, padding_right: f64) -> f64 {
    (client_width - padding_left - padding_right).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paddings_are_subtracted_from_the_client_width() {
        // border-box host: width 100px, padding 10px each side.
        // clientWidth is 100, content is 80.
        assert_eq!(content_width(100.0, 10.0, 10.0), 80.0);
    }

    #[test]
    fn content_box_hosts_get_their_declared_width_back() {
        // content-box host: width 100px, padding 10px each side.
        // clientWidth is 120, content is 100.
        assert_eq!(content_width(120.0, 10.0, 10.0), 100.0);
    }

    #[test]
    fn unpadded_hosts_measure_as_client_width() {
        assert_eq!(content_width(640.0, 0.0, 0.0), 640.0);
    }

    #[test]
    fn width_never_goes_negative() {
        assert_eq!(content_width(5.0, 10.0, 10.0), 0.0);
    }
}
