//! The palette every built-in theme is layered over.
//!
//! Theme files may name any of these colors directly (`default: lavender`)
//! without declaring them in their own `palette` section.

use tinct_core::{Color, Palette};

const fn rgb(hex: u32) -> Color {
    Color::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

const fn rgba(hex: u32) -> Color {
    Color::rgba((hex >> 24) as u8, (hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

pub const SHARED: &[(&str, Color)] = &[
    ("transparent", rgba(0x00000000)),

    // blacks & voids
    ("void", rgb(0x04041b)),
    ("abyss", rgb(0x0b0915)),
    ("midnight", rgb(0x0e0a12)),
    ("obsidian", rgb(0x0f0e10)),
    ("cinder", rgb(0x0e0e15)),
    ("eclipse", rgb(0x0f0d1a)),
    ("charcoal", rgb(0x121217)),
    ("onyx", rgb(0x14141b)),

    // dark backgrounds
    ("shadow", rgb(0x1a102b)),
    ("dusk", rgb(0x1b1629)),
    ("twilight", rgb(0x1c1c25)),
    ("nightfall", rgb(0x212131)),
    ("storm", rgb(0x272636)),
    ("grape", rgb(0x2a2441)),
    ("plum", rgb(0x2a273f)),
    ("raisin", rgb(0x331f57)),

    // grays
    ("slate", rgb(0x3f3b5a)),
    ("iron", rgb(0x454148)),
    ("steel", rgb(0x45414c)),
    ("graphite", rgb(0x4d4a56)),
    ("pewter", rgb(0x626274)),
    ("fog", rgb(0x747277)),
    ("smoke", rgb(0x7d7a8b)),
    ("silver", rgb(0x808080)),
    ("ash", rgb(0x8b8f91)),
    ("mist", rgb(0x95969f)),
    ("cloud", rgb(0xb5b5b5)),

    // whites & near-whites
    ("bone", rgb(0xc3c1d3)),
    ("pearl", rgb(0xd0cfd3)),
    ("ivory", rgb(0xd1d3d9)),
    ("snow", rgb(0xdedede)),
    ("frost", rgb(0xe3e1e8)),
    ("cream", rgb(0xe6e2d1)),
    ("milk", rgb(0xf8f8f0)),
    ("white", rgb(0xffffff)),

    // reds
    ("crimson", rgb(0xb70b24)),
    ("ruby", rgb(0xe61f44)),
    ("coral", rgb(0xda4c51)),
    ("salmon", rgb(0xcc6666)),
    ("rose", rgb(0xe46876)),
    ("flamingo", rgb(0xf07178)),
    ("blush", rgb(0xff6188)),
    ("cherry", rgb(0xff6161)),
    ("peach", rgb(0xfe90a0)),

    // oranges
    ("ember", rgb(0xff7a00)),
    ("tangerine", rgb(0xffa114)),
    ("apricot", rgb(0xfaa629)),
    ("honey", rgb(0xf7b83d)),
    ("amber", rgb(0xffb547)),
    ("gold", rgb(0xe9c062)),
    ("butterscotch", rgb(0xffcb6b)),
    ("wheat", rgb(0xffe082)),

    // yellows
    ("mustard", rgb(0xe6d86b)),
    ("lemon", rgb(0xe6db74)),
    ("canary", rgb(0xffd866)),
    ("butter", rgb(0xdcdcaa)),

    // greens
    ("forest", rgb(0x4d7461)),
    ("olive", rgb(0xa7da1e)),
    ("lime", rgb(0xa6e22e)),
    ("grass", rgb(0xafe641)),
    ("sage", rgb(0xb1d36d)),
    ("mint", rgb(0x79e3bd)),
    ("spring", rgb(0x7ce6ab)),
    ("jade", rgb(0x88c6a8)),
    ("clover", rgb(0xc3e88d)),
    ("pistachio", rgb(0xd7f2a6)),
    ("neon", rgb(0xa8ff60)),

    // cyans
    ("teal", rgb(0x449dab)),
    ("ocean", rgb(0x33b3cc)),
    ("turquoise", rgb(0x78dce8)),
    ("aqua", rgb(0x93e3db)),
    ("seafoam", rgb(0x95d4ca)),
    ("lagoon", rgb(0xa1efe4)),
    ("arctic", rgb(0x89ddff)),
    ("glacier", rgb(0xa3eeff)),

    // blues
    ("navy", rgb(0x4b6672)),
    ("denim", rgb(0x5983a2)),
    ("cobalt", rgb(0x6183bb)),
    ("azure", rgb(0x82aaff)),
    ("sky", rgb(0x8db9e2)),
    ("periwinkle", rgb(0x91aac0)),
    ("cornflower", rgb(0x9ec3ff)),

    // purples
    ("eggplant", rgb(0x5b0092)),
    ("violet", rgb(0x7a73cc)),
    ("amethyst", rgb(0x9b8fb5)),
    ("lavender", rgb(0xc792ea)),
    ("orchid", rgb(0xc574dd)),
    ("lilac", rgb(0xd09bd2)),
    ("heather", rgb(0xdda4ff)),

    // pinks
    ("magenta", rgb(0xe60063)),
    ("hotpink", rgb(0xf184bc)),

    // alpha variants
    ("black-alpha-50", rgba(0x00000080)),
    ("shadow-alpha-60", rgba(0x1b162994)),
    ("grape-alpha-25", rgba(0x2a244140)),
    ("grape-alpha-40", rgba(0x2a24416b)),
    ("steel-alpha-50", rgba(0x45414c80)),
    ("fog-alpha-60", rgba(0x74727794)),
    ("smoke-alpha-80", rgba(0x827b90cf)),
    ("cloud-alpha-25", rgba(0xb5b5b545)),
    ("pearl-alpha-50", rgba(0xd0cfd380)),
    ("frost-alpha-50", rgba(0xe3e1e880)),
    ("frost-alpha-70", rgba(0xe3e1e8b7)),
    ("frost-alpha-90", rgba(0xe3e1e8e4)),
    ("white-alpha-60", rgba(0xffffff99)),

    // special accents
    ("neon-mint-alpha-95", rgba(0x3fffbdf2)),
    ("arctic-glow", rgba(0x80ffecba)),
    ("mint-glow", rgba(0x6bffbfdb)),
];

/// The shared palette, in declaration order.
pub fn shared() -> Palette {
    SHARED.iter().map(|(name, color)| (*name, *color)).collect()
}
