//! The native style bitmask and its diagnostic rendering.

use std::fmt;

/// Native widget style flags as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleBits(pub u32);

impl StyleBits {
    pub const NONE: StyleBits = StyleBits(0);
    pub const BAR: StyleBits = StyleBits(1 << 1);
    pub const DROP_DOWN: StyleBits = StyleBits(1 << 2);
    pub const POP_UP: StyleBits = StyleBits(1 << 3);
    pub const PUSH: StyleBits = StyleBits(1 << 4);
    pub const CHECK: StyleBits = StyleBits(1 << 5);
    pub const RADIO: StyleBits = StyleBits(1 << 6);
    pub const TOGGLE: StyleBits = StyleBits(1 << 7);
    pub const H_SCROLL: StyleBits = StyleBits(1 << 8);
    pub const V_SCROLL: StyleBits = StyleBits(1 << 9);
    pub const BORDER: StyleBits = StyleBits(1 << 11);
    pub const CLIP_CHILDREN: StyleBits = StyleBits(1 << 12);
    pub const RESIZE: StyleBits = StyleBits(1 << 13);
    pub const MIN: StyleBits = StyleBits(1 << 14);
    pub const MAX: StyleBits = StyleBits(1 << 15);
    pub const FLAT: StyleBits = StyleBits(1 << 16);
    pub const READ_ONLY: StyleBits = StyleBits(1 << 17);
    pub const CLOSE: StyleBits = StyleBits(1 << 18);
    pub const WRAP: StyleBits = StyleBits(1 << 19);
    pub const SEARCH: StyleBits = StyleBits(1 << 20);
    pub const TITLE: StyleBits = StyleBits(1 << 21);
    pub const MULTI: StyleBits = StyleBits(1 << 22);
    pub const PASSWORD: StyleBits = StyleBits(1 << 23);
    pub const FULL_SELECTION: StyleBits = StyleBits(1 << 24);

    pub const fn contains(self, other: StyleBits) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: StyleBits) -> StyleBits {
        StyleBits(self.0 | other.0)
    }

    /// Set flag names in table order, space separated. Empty for no flags.
    /// Bits without a name are omitted.
    pub fn describe(self) -> String {
        STYLE_FLAG_NAMES
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::ops::BitOr for StyleBits {
    type Output = StyleBits;
    fn bitor(self, rhs: StyleBits) -> StyleBits {
        self.union(rhs)
    }
}

impl fmt::Display for StyleBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

static STYLE_FLAG_NAMES: &[(&str, StyleBits)] = &[
    ("BAR", StyleBits::BAR),
    ("DROP_DOWN", StyleBits::DROP_DOWN),
    ("POP_UP", StyleBits::POP_UP),
    ("PUSH", StyleBits::PUSH),
    ("CHECK", StyleBits::CHECK),
    ("RADIO", StyleBits::RADIO),
    ("TOGGLE", StyleBits::TOGGLE),
    ("H_SCROLL", StyleBits::H_SCROLL),
    ("V_SCROLL", StyleBits::V_SCROLL),
    ("BORDER", StyleBits::BORDER),
    ("CLIP_CHILDREN", StyleBits::CLIP_CHILDREN),
    ("RESIZE", StyleBits::RESIZE),
    ("MIN", StyleBits::MIN),
    ("MAX", StyleBits::MAX),
    ("FLAT", StyleBits::FLAT),
    ("READ_ONLY", StyleBits::READ_ONLY),
    ("CLOSE", StyleBits::CLOSE),
    ("WRAP", StyleBits::WRAP),
    ("SEARCH", StyleBits::SEARCH),
    ("TITLE", StyleBits::TITLE),
    ("MULTI", StyleBits::MULTI),
    ("PASSWORD", StyleBits::PASSWORD),
    ("FULL_SELECTION", StyleBits::FULL_SELECTION),
];
