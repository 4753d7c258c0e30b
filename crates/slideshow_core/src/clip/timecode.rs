//! Frame/timecode conversion for clip durations.
//!
//! Non-drop-frame `hh:mm:ss:ff` at the nearest integer frame rate.

use serde::{Deserialize, Serialize};

use super::error::{ClipError, ClipResult};

/// Converts between frame counts and `hh:mm:ss:ff` strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timecode {
    fps: f64,
}

impl Timecode {
    /// Create a converter for the given frame rate.
    pub fn new(fps: f64) -> ClipResult<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(ClipError::InvalidFrameRate { fps });
        }
        Ok(Self { fps })
    }

    /// Frame rate.
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Frames counted per timecode second.
    fn base(&self) -> u32 {
        (self.fps.round() as u32).max(1)
    }

    /// Format a frame count as `hh:mm:ss:ff`.
    ///
    /// # Examples
    ///
    /// ```
    /// use slideshow_core::clip::Timecode;
    ///
    /// let tc = Timecode::new(25.0).unwrap();
    /// assert_eq!(tc.frames_to_timecode(125), "00:00:05:00");
    /// assert_eq!(tc.frames_to_timecode(90_001), "01:00:00:01");
    /// ```
    pub fn frames_to_timecode(&self, frames: u32) -> String {
        let base = self.base();
        let ff = frames % base;
        let total_seconds = frames / base;
        let ss = total_seconds % 60;
        let mm = (total_seconds / 60) % 60;
        let hh = total_seconds / 3600;
        format!("{:02}:{:02}:{:02}:{:02}", hh, mm, ss, ff)
    }

    /// Parse `hh:mm:ss:ff` into a frame count.
    ///
    /// `;` and `.` are accepted as separators too. Fewer fields are read
    /// from the right, so `05:00` is five seconds.
    pub fn timecode_to_frames(&self, timecode: &str) -> ClipResult<u32> {
        let fields: Vec<&str> = timecode
            .trim()
            .split(|c| c == ':' || c == ';' || c == '.')
            .collect();
        if fields.is_empty() || fields.len() > 4 {
            return Err(ClipError::invalid_timecode(timecode, "expected hh:mm:ss:ff"));
        }

        let mut values = [0u32; 4];
        let start = 4 - fields.len();
        for (slot, field) in values[start..].iter_mut().zip(&fields) {
            *slot = field
                .parse()
                .map_err(|_| ClipError::invalid_timecode(timecode, "non-numeric field"))?;
        }

        let [hh, mm, ss, ff] = values;
        let base = self.base();
        if mm >= 60 || ss >= 60 || ff >= base {
            return Err(ClipError::invalid_timecode(timecode, "field out of range"));
        }

        let seconds = u64::from(hh) * 3600 + u64::from(mm) * 60 + u64::from(ss);
        let frames = seconds * u64::from(base) + u64::from(ff);
        u32::try_from(frames).map_err(|_| ClipError::invalid_timecode(timecode, "too long"))
    }

    /// Default luma transition length: one second, rounded up.
    pub fn default_luma_frames(&self) -> u32 {
        self.fps.ceil() as u32
    }
}

/// A duration entered either as timecode or as a frame count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipDuration {
    Timecode(String),
    Frames(u32),
}

impl ClipDuration {
    /// Duration in frames.
    pub fn to_frames(&self, tc: &Timecode) -> ClipResult<u32> {
        match self {
            ClipDuration::Timecode(value) => tc.timecode_to_frames(value),
            ClipDuration::Frames(frames) => Ok(*frames),
        }
    }

    /// Duration as `hh:mm:ss:ff`.
    pub fn to_timecode(&self, tc: &Timecode) -> ClipResult<String> {
        Ok(tc.frames_to_timecode(self.to_frames(tc)?))
    }

    /// Same duration in the other representation.
    pub fn toggled(&self, tc: &Timecode) -> ClipResult<ClipDuration> {
        Ok(match self {
            ClipDuration::Timecode(_) => ClipDuration::Frames(self.to_frames(tc)?),
            ClipDuration::Frames(frames) => ClipDuration::Timecode(tc.frames_to_timecode(*frames)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pal() -> Timecode {
        Timecode::new(25.0).unwrap()
    }

    #[test]
    fn rejects_bad_frame_rates() {
        assert!(Timecode::new(0.0).is_err());
        assert!(Timecode::new(-25.0).is_err());
        assert!(Timecode::new(f64::NAN).is_err());
    }

    #[test]
    fn formats_and_parses() {
        let tc = pal();
        assert_eq!(tc.frames_to_timecode(0), "00:00:00:00");
        assert_eq!(tc.frames_to_timecode(1), "00:00:00:01");
        assert_eq!(tc.timecode_to_frames("00:00:05:00").unwrap(), 125);
        assert_eq!(tc.timecode_to_frames("00:01:00:10").unwrap(), 1510);
        assert_eq!(tc.timecode_to_frames("00;00;01;00").unwrap(), 25);
        assert_eq!(tc.timecode_to_frames("05:00").unwrap(), 125);
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let tc = pal();
        assert!(tc.timecode_to_frames("00:00:00:25").is_err());
        assert!(tc.timecode_to_frames("00:61:00:00").is_err());
        assert!(tc.timecode_to_frames("aa:00:00:00").is_err());
        assert!(tc.timecode_to_frames("0:0:0:0:0").is_err());
    }

    #[test]
    fn ntsc_uses_rounded_base() {
        let tc = Timecode::new(29.97).unwrap();
        assert_eq!(tc.frames_to_timecode(30), "00:00:01:00");
        assert_eq!(tc.default_luma_frames(), 30);
    }

    #[test]
    fn duration_toggles_between_forms() {
        let tc = pal();
        let duration = ClipDuration::Timecode("00:00:02:05".to_string());
        assert_eq!(duration.to_frames(&tc).unwrap(), 55);
        let frames = duration.toggled(&tc).unwrap();
        assert_eq!(frames, ClipDuration::Frames(55));
        assert_eq!(
            frames.toggled(&tc).unwrap(),
            ClipDuration::Timecode("00:00:02:05".to_string())
        );
    }
}
