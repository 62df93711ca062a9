use alloc::{boxed::Box, vec::Vec};

use quickcheck::{Arbitrary, Gen};

/// Path text drawn mostly from `FRLS`, with the occasional stray byte.
#[derive(Debug, Clone)]
pub(crate) struct PathText(pub(crate) Vec<u8>);

impl Arbitrary for PathText {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % (g.size() + 1);
        let bytes = (0..len)
            .map(|_| match u8::arbitrary(g) % 16 {
                0 => u8::arbitrary(g),
                1..=6 | 14 | 15 => b'F',
                7..=9 => b'R',
                10..=12 => b'L',
                _ => b'S',
            })
            .collect();
        PathText(bytes)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(PathText))
    }
}

/// A path that never leaves the grid: runs of one to five `F`s separated by
/// `R`, `L`, `RR` or `LL`, ending in `S`.
#[derive(Debug, Clone)]
pub(crate) struct OrthoPath {
    pub(crate) text: Vec<u8>,
    pub(crate) forwards: usize,
    pub(crate) turns: usize,
}

const TURNS: [&[u8]; 4] = [b"R", b"L", b"RR", b"LL"];

impl Arbitrary for OrthoPath {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut path = OrthoPath {
            text: Vec::new(),
            forwards: 0,
            turns: 0,
        };
        let segments = 1 + usize::arbitrary(g) % 8;
        for i in 0..segments {
            if i > 0 {
                let turn = g.choose(&TURNS).copied().unwrap_or(b"R");
                path.text.extend_from_slice(turn);
                path.turns += 1;
            }
            let run = 1 + usize::arbitrary(g) % 5;
            path.text.extend(core::iter::repeat_n(b'F', run));
            path.forwards += run;
        }
        path.text.push(b'S');
        path
    }
}
