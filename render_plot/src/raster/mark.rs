use smallvec::*;

///
/// The shapes that can be used to mark a point on a plot
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkShape {
    Circle,
    Starlet,
    Hubcap,
    Rectangle,
    Snowflake,
    Triangle,
    Sharp,
    Column,
    Filling,
    Symbol,
}

///
/// How a mark is drawn
///
#[derive(Clone, Debug, PartialEq)]
pub enum MarkOutline {
    /// A set of line segments, drawn with the mark's stroke thickness
    Segments(SmallVec<[((f64, f64), (f64, f64)); 12]>),

    /// A filled square of the specified size
    Square(u32),
}

impl MarkShape {
    ///
    /// All of the mark shapes, in the order that plots cycle through them
    ///
    pub const ALL: [MarkShape; 10] = [
        MarkShape::Circle, MarkShape::Starlet, MarkShape::Hubcap, MarkShape::Rectangle, MarkShape::Snowflake,
        MarkShape::Triangle, MarkShape::Sharp, MarkShape::Column, MarkShape::Filling, MarkShape::Symbol,
    ];

    ///
    /// Generates the outline of this shape centred on `(x, y)`, with `size` being the radius of the mark in pixels
    ///
    pub fn outline(&self, x: f64, y: f64, size: u32) -> MarkOutline {
        let r = size as f64;

        // Points are offsets from the centre
        let path: SmallVec<[(f64, f64, f64, f64); 12]> = match self {
            MarkShape::Circle => {
                let r2 = r * 0.5;
                let r6 = r * 0.8660;

                // Each quadrant is three segments starting from the horizontal axis
                [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)].iter()
                    .flat_map(|&(sx, sy)| {
                        [
                            (sx * r,  0.0,     sx * r6, sy * r2),
                            (sx * r6, sy * r2, sx * r2, sy * r6),
                            (sx * r2, sy * r6, 0.0,     sy * r),
                        ]
                    })
                    .collect()
            }

            MarkShape::Starlet => {
                let k  = 0.4;
                let r6 = r * 1.2;
                let r3 = r * 0.3708;
                let r5 = r * 0.7054;
                let r8 = r * 0.9708;
                let r9 = r * 1.1413;

                smallvec![
                    (0.0,       r6 * k,     r5,         r8),
                    (r5,        r8,         r9 * k,     r3 * k),
                    (r9 * k,    r3 * k,     r9,         -r3),
                    (r9,        -r3,        r5 * k,     -r8 * k),
                    (r5 * k,    -r8 * k,    0.0,        -r6),
                    (0.0,       -r6,        -r5 * k,    -r8 * k),
                    (-r5 * k,   -r8 * k,    -r9,        -r3),
                    (-r9,       -r3,        -r9 * k,    r3 * k),
                    (-r9 * k,   r3 * k,     -r5,        r8),
                    (-r5,       r8,         0.0,        r6 * k),
                ]
            }

            MarkShape::Hubcap => {
                let r2 = r * 0.7;

                smallvec![
                    (-r2, r, r2, r),
                    (r2, r, 0.0, -r),
                    (0.0, -r, -r2, r),
                ]
            }

            MarkShape::Rectangle => {
                let r2 = r * 0.9;

                smallvec![
                    (-r2, -r2, r2, -r2),
                    (-r2, r2, r2, r2),
                    (-r2, -r2, -r2, r2),
                    (r2, -r2, r2, r2),
                ]
            }

            MarkShape::Snowflake => {
                let r2 = r * 0.7;

                smallvec![
                    (-r, 0.0, r, 0.0),
                    (0.0, -r, 0.0, r),
                    (-r2, -r2, r2, r2),
                    (-r2, r2, r2, -r2),
                ]
            }

            MarkShape::Triangle => {
                smallvec![
                    (-r, -r, r, -r),
                    (r, -r, 0.0, r),
                    (0.0, r, -r, -r),
                ]
            }

            MarkShape::Sharp => {
                let r2 = r * 0.5;

                smallvec![
                    (-r, -r2, r, -r2),
                    (-r, r2, r, r2),
                    (-r2, -r, -r2, r),
                    (r2, -r, r2, r),
                ]
            }

            MarkShape::Column => {
                let r2 = r * 0.5;

                smallvec![
                    (-r2, -r, r2, -r),
                    (-r2, r, r2, r),
                    (-r2, -r, -r2, r),
                    (r2, -r, r2, r),
                ]
            }

            MarkShape::Filling => {
                return MarkOutline::Square((r * 1.8) as u32);
            }

            MarkShape::Symbol => {
                let r2 = r * 0.9;

                smallvec![
                    (0.0, -r2, 0.0, r2),
                    (-r2, r2, r2, r2),
                    (-r2, -r2, r2, -r2),
                ]
            }
        };

        MarkOutline::Segments(path.into_iter()
            .map(|(x1, y1, x2, y2)| ((x + x1, y + y1), (x + x2, y + y2)))
            .collect())
    }
}
