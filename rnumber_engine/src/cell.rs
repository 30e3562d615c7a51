// cell.rs - Cell states and their neighbor weights

/// One of the five states a grid cell can hold.
///
/// The weight is what a cell contributes to each of its neighbors' sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    AliveA,     // +3
    AliveB,     // +1
    AliveC,     // -3
    AliveD,     // -1
}

impl Cell {
    pub const ALL: [Cell; 5] = [Cell::Empty, Cell::AliveA, Cell::AliveB, Cell::AliveC, Cell::AliveD];

    pub const fn weight(self) -> i32 {
        match self {
            Cell::Empty  => 0,
            Cell::AliveA => 3,
            Cell::AliveB => 1,
            Cell::AliveC => -3,
            Cell::AliveD => -1,
        }
    }

    pub const fn is_alive(self) -> bool {
        !matches!(self, Cell::Empty)
    }
}
