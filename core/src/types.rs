/// Single coordinate axis used for cell positions.
pub type Coord = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Counter type used for animation frames.
pub type Tick = u32;
