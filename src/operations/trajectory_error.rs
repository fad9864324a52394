use crate::error::{GeometryError, Result};
use crate::geometry::{Path, Segment};
use crate::math::area_2d::{quadrilateral_area, right_triangle_area};
use crate::math::distance;

/// Computes the error between a reference trajectory and the trajectory a
/// positioning system reported for it.
///
/// The error is the area enclosed between the two polylines divided by the
/// length of the reference path, so results stay comparable across runs of
/// different lengths. The sweep advances one pointer per step along each
/// path and never moves backwards; a measured path that doubles back over a
/// stretch already swept is counted as first encountered.
pub struct TrajectoryError<'a> {
    reference: &'a Path,
    measured: &'a Path,
}

impl<'a> TrajectoryError<'a> {
    /// Creates a new trajectory error computation over the two paths.
    #[must_use]
    pub fn new(reference: &'a Path, measured: &'a Path) -> Self {
        Self {
            reference,
            measured,
        }
    }

    /// Runs the sweep and returns the normalized error.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateInput`] if either path has fewer
    /// than two points, or if the reference path has zero length.
    #[allow(clippy::float_cmp)]
    pub fn execute(&self) -> Result<f64> {
        if self.reference.len() < 2 {
            return Err(GeometryError::DegenerateInput(format!(
                "reference path needs at least 2 points, got {}",
                self.reference.len()
            ))
            .into());
        }
        if self.measured.len() < 2 {
            return Err(GeometryError::DegenerateInput(format!(
                "measured path needs at least 2 points, got {}",
                self.measured.len()
            ))
            .into());
        }
        let length = self.reference.length()?;
        if length == 0.0 {
            return Err(
                GeometryError::DegenerateInput("reference path has zero length".into()).into(),
            );
        }

        let mut area = 0.0;
        let mut i = 0;
        let mut j = 0;

        while i + 1 < self.reference.len() && j + 1 < self.measured.len() {
            let s_ref = self.reference.segment(i);
            let s_meas = self.measured.segment(j);

            let hit = s_ref.intersection(&s_meas);
            let foot_from = s_ref.project(s_meas.from);
            let foot_to = s_ref.project(s_meas.to);

            match hit {
                // The paths meet exactly at the end of the reference
                // segment: hand over to the next reference segment.
                Some(p) if p == s_ref.to && s_ref.to == s_meas.from => {
                    i += 1;
                }
                // Crossing with both feet on the reference segment: one
                // right triangle on each side of the crossing.
                Some(p) if s_ref.contains(foot_from) && s_ref.contains(foot_to) => {
                    area += right_triangle_area(
                        distance(foot_from, p),
                        distance(s_meas.from, foot_from),
                    );
                    area += right_triangle_area(distance(p, foot_to), distance(s_meas.to, foot_to));
                    j += 1;
                }
                // Crossing reported past the reference segment: anchor the
                // two triangles on the measured segment instead.
                Some(p) => {
                    let before = Segment::new(s_meas.from, p);
                    let after = Segment::new(s_meas.to, p);
                    area += right_triangle_area(
                        distance(s_meas.from, p),
                        distance(s_ref.from, before.project(s_ref.from)),
                    );
                    area += right_triangle_area(
                        distance(p, s_meas.to),
                        distance(s_ref.to, after.project(s_ref.to)),
                    );
                    j += 1;
                }
                // No crossing and the measured segment shadows the
                // reference: one quadrilateral between segment and shadow.
                None if s_ref.contains(foot_from) && s_ref.contains(foot_to) => {
                    area += quadrilateral_area(foot_from, foot_to, s_meas.from, s_meas.to);
                    j += 1;
                }
                // The measured segment has left this reference segment.
                None => {
                    i += 1;
                }
            }
            // TODO: detect the measured path backtracking over a stretch
            // already swept and subtract the double-counted area.
        }

        Ok(area / length)
    }
}
