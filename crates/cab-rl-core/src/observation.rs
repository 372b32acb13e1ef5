//! Fixed-length vector encodings consumed by learning components

use ndarray::Array1;

/// Encodes a value as a fixed-length feature vector
pub trait Encoder<T: ?Sized>: Send + Sync {
    /// Length of every vector this encoder produces
    fn dim(&self) -> usize;

    /// Encode `input`
    fn encode(&self, input: &T) -> Array1<f32>;
}

/// Vector with a single `1.0` at each of `hot` and zeros elsewhere
#[must_use]
pub fn multi_hot(dim: usize, hot: &[usize]) -> Array1<f32> {
    let mut v = Array1::zeros(dim);
    for &i in hot {
        debug_assert!(i < dim, "hot index {i} out of range for dim {dim}");
        v[i] = 1.0;
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_hot() {
        let v = multi_hot(5, &[0, 3]);
        assert_eq!(v.to_vec(), vec![1.0, 0.0, 0.0, 1.0, 0.0]);
        assert!((v.sum() - 2.0).abs() < f32::EPSILON);
    }
}
