use super::*;

#[test]
fn test_window_covers_halo() {
  assert_eq!(WINDOW_MIN, -1);
  assert_eq!(WINDOW_MAX, CHUNK_CELLS);
  assert_eq!(WINDOW_SIZE_CB, 5832);
}

#[test]
fn test_window_index_roundtrip() {
  for z in WINDOW_MIN..=WINDOW_MAX {
    for y in WINDOW_MIN..=WINDOW_MAX {
      for x in WINDOW_MIN..=WINDOW_MAX {
        let idx = window_index(x, y, z);
        assert!(idx < WINDOW_SIZE_CB, "Index {} out of range", idx);
        assert_eq!(
          window_coord(idx),
          (x, y, z),
          "Roundtrip failed for ({}, {}, {})",
          x,
          y,
          z
        );
      }
    }
  }
}

#[test]
fn test_leaf_index_bounds() {
  assert_eq!(leaf_index(0, 0, 0), 0);
  assert_eq!(leaf_index(1, 0, 0), 1);
  assert_eq!(leaf_index(0, 1, 0), 16);
  assert_eq!(leaf_index(0, 0, 1), 256);
  assert_eq!(leaf_index(15, 15, 15), LEAF_VOLUME - 1);
}

#[test]
fn test_corner_offsets_match_bits() {
  for (i, offset) in CORNER_OFFSETS.iter().enumerate() {
    let expected = IVec3::new((i & 1) as i32, ((i >> 1) & 1) as i32, ((i >> 2) & 1) as i32);
    assert_eq!(*offset, expected, "Corner {} offset mismatch", i);
  }
}
