/// One bit per padded board cell for a single player.
pub type Bitboard = u128;

/// The four line orientations a win can run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up a single column.
    Vertical,
    /// Along a row.
    Horizontal,
    /// Towards the next column, one row lower (`\` as drawn).
    DiagonalDown,
    /// Towards the next column, one row higher (`/` as drawn).
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];
}

/// Column-major bit layout with one sentinel row on top of every column.
///
/// Cell `(column, row)` (row 0 is the bottom) lives at bit
/// `column * (height + 1) + row`. Bit `row == height` of each column is never
/// set, which keeps shifted runs from wrapping into the neighbouring column.
///
/// For the default 7x6 board the offsets are:
///
/// ```text
///  6 13 20 27 34 41 48   <- sentinels
///  5 12 19 26 33 40 47
///  4 11 18 25 32 39 46
///  3 10 17 24 31 38 45
///  2  9 16 23 30 37 44
///  1  8 15 22 29 36 43
///  0  7 14 21 28 35 42
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    height: usize,
    width: usize,
}

impl Layout {
    /// Largest padded board a [`Bitboard`] can hold.
    pub const MAX_BITS: usize = Bitboard::BITS as usize;

    pub fn new(height: usize, width: usize) -> Self {
        Layout { height, width }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of bits used per column, sentinel included.
    pub fn column_stride(&self) -> usize {
        self.height + 1
    }

    /// Bit offset of `(column, row)`, row 0 being the bottom.
    pub fn offset(&self, column: usize, row: usize) -> usize {
        column * self.column_stride() + row
    }

    /// Inverse of [`offset`](Self::offset). Sentinel and out-of-board offsets
    /// map to `None`.
    pub fn position(&self, offset: usize) -> Option<(usize, usize)> {
        let column = offset / self.column_stride();
        let row = offset % self.column_stride();
        if column >= self.width || row == self.height {
            None
        } else {
            Some((column, row))
        }
    }

    /// Offset of the bottom cell of a column.
    pub fn bottom(&self, column: usize) -> usize {
        self.offset(column, 0)
    }

    /// Offset of the sentinel bit that caps a column.
    pub fn top_sentinel(&self, column: usize) -> usize {
        (column + 1) * self.column_stride() - 1
    }

    /// Shift distance between consecutive cells along `direction`.
    pub fn stride(&self, direction: Direction) -> usize {
        match direction {
            Direction::Vertical => 1,
            Direction::Horizontal => self.height + 1,
            Direction::DiagonalDown => self.height,
            Direction::DiagonalUp => self.height + 2,
        }
    }

    /// All playable cells of a column.
    pub fn column_mask(&self, column: usize) -> Bitboard {
        let cells: Bitboard = (1 << self.height) - 1;
        cells << self.bottom(column)
    }

    /// Every playable cell on the board; sentinels excluded.
    pub fn board_mask(&self) -> Bitboard {
        (0..self.width).fold(0, |mask, column| mask | self.column_mask(column))
    }

    /// Every sentinel bit on the board.
    pub fn sentinel_mask(&self) -> Bitboard {
        (0..self.width).fold(0, |mask, column| mask | bit(self.top_sentinel(column)))
    }
}

/// Single-bit board with only `offset` set.
pub fn bit(offset: usize) -> Bitboard {
    1 << offset
}
