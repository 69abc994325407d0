//! Tests for tile construction, equality and floored similarity

#[cfg(test)]
mod tests {
    use tessera::TesseraError;
    use tessera::tiles::{Similarity, Tile};

    fn tile(attributes: &[u8]) -> Tile<u8> {
        Tile::new(attributes.to_vec()).unwrap()
    }

    // Tests zero-attribute tiles are rejected
    // Verified by accepting empty attribute lists
    #[test]
    fn test_empty_tile_is_invalid_state() {
        let result = Tile::<u8>::new(Vec::new());
        assert!(matches!(result, Err(TesseraError::InvalidState { .. })));

        let derived = Tile::from_serialized("");
        assert!(matches!(derived, Err(TesseraError::InvalidState { .. })));
    }

    // Tests 7 of 9 matching attributes floors to 0.77 rather than rounding to 0.78
    // Verified by rounding instead of flooring
    #[test]
    fn test_similarity_floors_to_hundredths() {
        let a = tile(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let b = tile(&[1, 2, 3, 4, 5, 6, 7, 0, 0]);

        let score = a.similarity(&b).unwrap();
        assert_eq!(score.hundredths(), 77);
        assert_eq!(score.to_string(), "0.77");

        // 2 of 3 is 0.666..., which rounds to 0.67 but floors to 0.66
        let c = tile(&[1, 2, 3]);
        let d = tile(&[1, 2, 0]);
        assert_eq!(c.similarity(&d).unwrap().hundredths(), 66);
    }

    // Tests a tile is fully similar to itself even for awkward cardinalities
    // Verified by computing the ratio in floating point
    #[test]
    fn test_self_similarity_is_one() {
        for len in 1..=40_u8 {
            let attributes: Vec<u8> = (0..len).collect();
            let t = tile(&attributes);
            assert_eq!(t.similarity(&t).unwrap(), Similarity::ONE, "cardinality {len}");
        }
    }

    // Tests similarity between tiles of different lengths fails
    // Verified by truncating to the shorter tile
    #[test]
    fn test_cardinality_mismatch() {
        let a = tile(&[1, 2, 3]);
        let b = tile(&[1, 2]);

        match a.similarity(&b) {
            Err(TesseraError::CardinalityMismatch { left, right }) => {
                assert_eq!((left, right), (3, 2));
            }
            other => unreachable!("Expected CardinalityMismatch, got {other:?}"),
        }
    }

    // Tests equality is positional
    // Verified by comparing attributes as sets
    #[test]
    fn test_equality_is_order_sensitive() {
        assert_eq!(tile(&[1, 2, 3]), tile(&[1, 2, 3]));
        assert_ne!(tile(&[1, 2, 3]), tile(&[3, 2, 1]));
        assert_ne!(tile(&[1, 2]), tile(&[1, 2, 3]));
    }

    // Tests serialized identities split into one attribute per character
    // Verified by splitting on bytes
    #[test]
    fn test_from_serialized_splits_characters() {
        let t = Tile::from_serialized("8844d0").unwrap();
        assert_eq!(t.cardinality(), 6);
        assert_eq!(t.attributes(), &['8', '8', '4', '4', 'd', '0']);
    }

    // Tests conversions between scores and fractions
    // Verified by dividing by 10 instead of 100
    #[test]
    fn test_similarity_conversions() {
        let score = Similarity::from_ratio(3, 4);
        assert_eq!(score.hundredths(), 75);
        assert!((score.as_f64() - 0.75).abs() < f64::EPSILON);
        assert!(score.meets(0.75));
        assert!(!score.meets(0.76));

        assert_eq!(Similarity::from_hundredths(101), None);
        assert_eq!(Similarity::try_from(0.77_f32).unwrap().hundredths(), 77);
        assert!(Similarity::try_from(1.5_f32).is_err());
        assert_eq!(Similarity::ONE.to_string(), "1.00");
    }

    // Tests deserialization upholds the non-empty invariant
    // Verified by deriving Deserialize without the conversion
    #[test]
    fn test_deserialize_rejects_empty_tile() {
        let parsed: Tile<char> = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(parsed.cardinality(), 2);

        let empty: Result<Tile<char>, _> = serde_json::from_str("[]");
        assert!(empty.is_err());
    }
}
