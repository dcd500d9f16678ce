use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a man stepping forward. White starts on rows 6-9 and
    /// advances towards row 0.
    pub fn forward(&self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Row on which a man of this color is promoted.
    pub fn promotion_row(&self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    WhiteMan,
    WhiteKing,
    BlackMan,
    BlackKing,
}

impl Piece {
    pub fn man(color: Color) -> Self {
        match color {
            Color::White => Self::WhiteMan,
            Color::Black => Self::BlackMan,
        }
    }

    pub fn king(color: Color) -> Self {
        match color {
            Color::White => Self::WhiteKing,
            Color::Black => Self::BlackKing,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::Empty
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Self::Empty => None,
            Self::WhiteMan | Self::WhiteKing => Some(Color::White),
            Self::BlackMan | Self::BlackKing => Some(Color::Black),
        }
    }

    pub fn is(&self, color: Color) -> bool {
        self.color() == Some(color)
    }

    pub fn is_king(&self) -> bool {
        matches!(self, Self::WhiteKing | Self::BlackKing)
    }

    pub fn is_man(&self) -> bool {
        matches!(self, Self::WhiteMan | Self::BlackMan)
    }

    /// The piece after promotion. Kings and empty squares are unchanged.
    pub fn promoted(&self) -> Self {
        match self {
            Self::WhiteMan => Self::WhiteKing,
            Self::BlackMan => Self::BlackKing,
            other => *other,
        }
    }

    /// Same kind, other color.
    pub fn swapped(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::WhiteMan => Self::BlackMan,
            Self::WhiteKing => Self::BlackKing,
            Self::BlackMan => Self::WhiteMan,
            Self::BlackKing => Self::WhiteKing,
        }
    }

    /// Index into per-kind tables (Zobrist). Empty has no index.
    pub fn kind_index(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::WhiteMan => Some(0),
            Self::WhiteKing => Some(1),
            Self::BlackMan => Some(2),
            Self::BlackKing => Some(3),
        }
    }

    /// Wire code: 0 empty, 1 white man, 2 white king, 3 black man, 4 black king.
    pub fn code(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::WhiteMan => 1,
            Self::WhiteKing => 2,
            Self::BlackMan => 3,
            Self::BlackKing => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::WhiteMan),
            2 => Some(Self::WhiteKing),
            3 => Some(Self::BlackMan),
            4 => Some(Self::BlackKing),
            _ => None,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Empty),
            'w' => Some(Self::WhiteMan),
            'W' => Some(Self::WhiteKing),
            'b' => Some(Self::BlackMan),
            'B' => Some(Self::BlackKing),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Self::Empty => '.',
            Self::WhiteMan => 'w',
            Self::WhiteKing => 'W',
            Self::BlackMan => 'b',
            Self::BlackKing => 'B',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
