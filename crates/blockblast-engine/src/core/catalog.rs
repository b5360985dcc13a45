use super::shape::Shape;

/// Number of distinct shapes the game can spawn.
pub const SHAPE_CATALOG_LEN: usize = 40;

/// Every piece the game can spawn, from dominoes up to the 3×3 block and the
/// five-cell lines.
///
/// The survivability estimate scans this whole table for every evaluated board, so
/// a missing entry silently understates risk. Shapes are listed in lexicographic
/// order of their offset lists.
pub const SHAPE_CATALOG: [Shape; SHAPE_CATALOG_LEN] = [
    Shape::from_offsets(&[(0, 0), (0, 1)]),
    Shape::from_offsets(&[(0, 0), (0, 1), (0, 2)]),
    Shape::from_offsets(&[(0, 0), (0, 1), (0, 2), (0, 3)]),
    // 1x5
    Shape::from_offsets(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]),
    Shape::from_offsets(&[(0, 0), (0, 1), (0, 2), (1, 0)]),
    Shape::from_offsets(&[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]),
    // 3x3
    Shape::from_offsets(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 0),
        (2, 1),
        (2, 2),
    ]),
    Shape::from_offsets(&[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)]),
    Shape::from_offsets(&[(0, 0), (0, 1), (0, 2), (1, 1)]),
    Shape::from_offsets(&[(0, 0), (0, 1), (0, 2), (1, 2)]),
    Shape::from_offsets(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]),
    Shape::from_offsets(&[(0, 0), (0, 1), (1, 0)]),
    // 2x2
    Shape::from_offsets(&[(0, 0), (0, 1), (1, 0), (1, 1)]),
    Shape::from_offsets(&[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]),
    Shape::from_offsets(&[(0, 0), (0, 1), (1, 0), (2, 0)]),
    Shape::from_offsets(&[(0, 0), (0, 1), (1, 1)]),
    Shape::from_offsets(&[(0, 0), (0, 1), (1, 1), (1, 2)]),
    Shape::from_offsets(&[(0, 0), (0, 1), (1, 1), (2, 1)]),
    Shape::from_offsets(&[(0, 0), (1, 0)]),
    Shape::from_offsets(&[(0, 0), (1, 0), (1, 1)]),
    Shape::from_offsets(&[(0, 0), (1, 0), (1, 1), (1, 2)]),
    Shape::from_offsets(&[(0, 0), (1, 0), (1, 1), (2, 0)]),
    Shape::from_offsets(&[(0, 0), (1, 0), (1, 1), (2, 1)]),
    Shape::from_offsets(&[(0, 0), (1, 0), (2, 0)]),
    Shape::from_offsets(&[(0, 0), (1, 0), (2, 0), (2, 1)]),
    Shape::from_offsets(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]),
    Shape::from_offsets(&[(0, 0), (1, 0), (2, 0), (3, 0)]),
    // 5x1
    Shape::from_offsets(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]),
    Shape::from_offsets(&[(0, 0), (1, 1)]),
    Shape::from_offsets(&[(0, 0), (1, 1), (2, 2)]),
    Shape::from_offsets(&[(0, 1), (0, 2), (1, 0), (1, 1)]),
    Shape::from_offsets(&[(0, 1), (1, 0)]),
    Shape::from_offsets(&[(0, 1), (1, 0), (1, 1)]),
    Shape::from_offsets(&[(0, 1), (1, 0), (1, 1), (1, 2)]),
    Shape::from_offsets(&[(0, 1), (1, 0), (1, 1), (2, 0)]),
    Shape::from_offsets(&[(0, 1), (1, 0), (1, 1), (2, 1)]),
    Shape::from_offsets(&[(0, 1), (1, 1), (2, 0), (2, 1)]),
    Shape::from_offsets(&[(0, 2), (1, 0), (1, 1), (1, 2)]),
    Shape::from_offsets(&[(0, 2), (1, 1), (2, 0)]),
    Shape::from_offsets(&[(0, 2), (1, 2), (2, 0), (2, 1), (2, 2)]),
];
