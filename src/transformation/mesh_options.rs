use crate::math::Real;
use crate::transformation::MeshError;

/// Tunable parameters of the domain mesher.
///
/// Erosion distances are expressed as multiples of the target mesh size.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "f32")] {
/// # use gridmesh2d::transformation::MeshOptions;
/// // Use default options (recommended for most cases)
/// let default_options = MeshOptions::default();
///
/// // Or let background grid points get closer to the outer boundary
/// let custom_options = MeshOptions {
///     outer_erosion: 0.5,
///     ..MeshOptions::default()
/// };
/// assert!(custom_options.validate().is_ok());
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct MeshOptions {
    /// Background grid points closer than `outer_erosion * mesh_size` to the outer
    /// boundary are discarded, leaving room for the boundary samples.
    pub outer_erosion: Real,
    /// Background grid points inside a trimming boundary are only discarded if they are
    /// at least `trimming_erosion * mesh_size` away from it. The remaining triangles of
    /// the hole are removed by the centroid classification.
    pub trimming_erosion: Real,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            outer_erosion: 1.0,
            trimming_erosion: 1.0,
        }
    }
}

impl MeshOptions {
    /// Checks that both erosion factors are finite and non-negative.
    pub fn validate(&self) -> Result<(), MeshError> {
        for (name, value) in [
            ("outer_erosion", self.outer_erosion),
            ("trimming_erosion", self.trimming_erosion),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(MeshError::InvalidParameter { name, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_or_nan_erosion_is_rejected() {
        assert_eq!(MeshOptions::default().validate(), Ok(()));

        let options = MeshOptions {
            trimming_erosion: -1.0,
            ..MeshOptions::default()
        };
        assert_eq!(
            options.validate(),
            Err(MeshError::InvalidParameter {
                name: "trimming_erosion",
                value: -1.0
            })
        );

        let options = MeshOptions {
            outer_erosion: Real::NAN,
            ..MeshOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(MeshError::InvalidParameter {
                name: "outer_erosion",
                ..
            })
        ));
    }
}
