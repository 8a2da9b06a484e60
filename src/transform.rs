#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

/// Affine transform components of the cropper image.
///
/// Mirrors the argument list of the image element's transform setter:
/// (scale-x, skew-y, skew-x, scale-y, translate-x, translate-y). Only the
/// first component is required; when a shorter tuple is applied the engine
/// fills in the rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformTuple {
    components: [f64; 6],
    len: usize,
}

impl TransformTuple {
    /// Maximum number of components a tuple carries.
    pub const MAX_COMPONENTS: usize = 6;

    /// The single-component `[0]` tuple applied when no original
    /// transform was ever captured.
    pub const BASELINE: Self = Self { components: [0.0; 6], len: 1 };

    /// Tuple with a single component.
    #[must_use]
    pub const fn single(value: f64) -> Self {
        let mut components = [0.0; 6];
        components[0] = value;
        Self { components, len: 1 }
    }

    /// Full six-component matrix.
    #[must_use]
    pub const fn from_matrix(components: [f64; 6]) -> Self {
        Self { components, len: 6 }
    }

    /// Tuple from 1..=6 components.
    ///
    /// Returns `None` for an empty slice; components past the sixth are
    /// ignored.
    #[must_use]
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let len = values.len().min(Self::MAX_COMPONENTS);
        let mut components = [0.0; 6];
        components[..len].copy_from_slice(&values[..len]);
        Some(Self { components, len })
    }

    /// The provided components, in setter argument order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.components[..self.len]
    }
}

impl Default for TransformTuple {
    fn default() -> Self {
        Self::BASELINE
    }
}
