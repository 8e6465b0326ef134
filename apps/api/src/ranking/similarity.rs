//! Cosine similarity between two embedding vectors.
//!
//! Pure functions, no state. Raw cosine lands in [-1, 1]; scores are clamped
//! to [0, 1] before they reach the wire.

/// Cosine similarity of two equal-length vectors, clamped to [0, 1].
/// A zero-norm vector scores 0.0. Dimension mismatch is a caller bug; both
/// vectors must come from the same model.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return 0.0;
    }

    (dot / denom).clamp(0.0, 1.0)
}

/// Rounds a score to 4 decimals for the wire format.
pub fn round4(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_identical_vectors_score_one() {
        let v = [0.3_f32, -0.5, 0.8, 0.1];
        let score = cosine_similarity(&v, &v);
        assert!((score - 1.0).abs() < TOLERANCE, "Score was {score}");
    }

    #[test]
    fn test_orthogonal_vectors_score_zero() {
        let a = [1.0_f32, 0.0];
        let b = [0.0_f32, 1.0];
        let score = cosine_similarity(&a, &b);
        assert!(score.abs() < TOLERANCE, "Score was {score}");
    }

    #[test]
    fn test_opposite_vectors_clamp_to_zero() {
        // Raw cosine is -1.0; the clamp keeps the score at 0.0.
        let a = [1.0_f32, 2.0, 3.0];
        let b = [-1.0_f32, -2.0, -3.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        let a = [0.0_f32, 0.0, 0.0];
        let b = [1.0_f32, 2.0, 3.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_score_always_in_unit_interval() {
        let pairs: &[(&[f32], &[f32])] = &[
            (&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]),
            (&[-1.0, 0.5, -0.25], &[0.75, -0.1, 2.0]),
            (&[1e-8, 1e-8], &[1e8, -1e8]),
        ];
        for (a, b) in pairs {
            let score = cosine_similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "Score was {score}");
        }
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.123_456_7), 0.1235);
        assert_eq!(round4(0.999_96), 1.0);
        assert_eq!(round4(0.0), 0.0);
    }
}
