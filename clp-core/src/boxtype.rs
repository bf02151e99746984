// Copyright 2024 the clp-core authors under the terms of the MIT License as detailed
// in the accompanying file LICENSE or <https://opensource.org/licenses/MIT>.

//! Box types and their admissible rotations.

/// Integer coordinate/dimension type used throughout the crate.
pub type Coord = i32;

/// A single box type: immutable dims, per-axis rotation permissions, weight.
///
/// Multiset identity (`ItemMultiset` keys) is by `id` alone, not by the full
/// set of fields: two `BoxType` values with the same `id` are always treated
/// as "the same type", even if constructed independently with (incorrectly)
/// differing dims. Callers are responsible for keeping `id` unique.
#[derive(Clone, Copy, Debug)]
pub struct BoxType {
    pub id: u32,
    pub l: Coord,
    pub w: Coord,
    pub h: Coord,
    pub rot_l: bool,
    pub rot_w: bool,
    pub rot_h: bool,
    pub weight: i64,
}

impl BoxType {
    #[track_caller]
    pub fn new(
        id: u32,
        l: Coord,
        w: Coord,
        h: Coord,
        rot_l: bool,
        rot_w: bool,
        rot_h: bool,
        weight: i64,
    ) -> Self {
        assert!(l > 0 && w > 0 && h > 0, "box dims must be positive");
        assert!(weight >= 0, "box weight must be non-negative");
        BoxType {
            id,
            l,
            w,
            h,
            rot_l,
            rot_w,
            rot_h,
            weight,
        }
    }

    pub fn volume(&self) -> i64 {
        self.l as i64 * self.w as i64 * self.h as i64
    }
}

impl PartialEq for BoxType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BoxType {}

impl std::hash::Hash for BoxType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// One of the six permutations of `{l,w,h}` onto the block axes
/// `(l_block, w_block, h_block)`, named after the letter order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Lwh,
    Whl,
    Hwl,
    Lhw,
    Hlw,
    Wlh,
}

impl Orientation {
    /// All six orientations, in a fixed canonical order.
    pub const ALL_SIX: [Orientation; 6] = [
        Orientation::Lwh,
        Orientation::Whl,
        Orientation::Hwl,
        Orientation::Lhw,
        Orientation::Hlw,
        Orientation::Wlh,
    ];

    /// Letters assigned to `(l_block, w_block, h_block)` respectively.
    fn letters(self) -> [char; 3] {
        match self {
            Orientation::Lwh => ['l', 'w', 'h'],
            Orientation::Whl => ['w', 'h', 'l'],
            Orientation::Hwl => ['h', 'w', 'l'],
            Orientation::Lhw => ['l', 'h', 'w'],
            Orientation::Hlw => ['h', 'l', 'w'],
            Orientation::Wlh => ['w', 'l', 'h'],
        }
    }

    /// `(l_block, w_block, h_block)` dims of `boxtype` under this orientation.
    pub fn dims(self, boxtype: &BoxType) -> (Coord, Coord, Coord) {
        let letters = self.letters();
        let pick = |c: char| match c {
            'l' => boxtype.l,
            'w' => boxtype.w,
            'h' => boxtype.h,
            _ => unreachable!(),
        };
        (pick(letters[0]), pick(letters[1]), pick(letters[2]))
    }

    /// The rotation flag of `boxtype` gating this orientation's admissibility.
    fn gating_flag(self, boxtype: &BoxType) -> bool {
        match self {
            Orientation::Lwh => true,
            Orientation::Whl | Orientation::Hwl => boxtype.rot_l,
            Orientation::Lhw | Orientation::Hlw => boxtype.rot_w,
            Orientation::Wlh => boxtype.rot_h,
        }
    }
}

/// Admissible orientations for `boxtype`, per §4.1: `lwh` always, the rest
/// gated by `rot_l`/`rot_w`/`rot_h` respectively.
pub fn admissible_orientations(boxtype: &BoxType) -> Vec<Orientation> {
    Orientation::ALL_SIX
        .iter()
        .copied()
        .filter(|o| o.gating_flag(boxtype))
        .collect()
}
