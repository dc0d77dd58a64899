//! Footprint generators for the four stencil morphologies.
//!
//! These reproduce the structuring-element definitions of the usual
//! morphology toolkits: `disk` and `diamond` span `2r + 1` pixels per side
//! and are symmetric around the center cell; `square` takes the full side
//! length as its parameter (so even sizes are possible); `star` is the union
//! of a centered square of side `2a + 1` and the largest inscribed diamond,
//! on a grid of side `(2a + 1) + 2 * (a / 2)`.
use crate::stencil::Stencil;

pub(crate) fn square(width: usize) -> Stencil {
    Stencil::from_raw(width, width, vec![1; width * width])
}

pub(crate) fn disk(radius: usize) -> Stencil {
    let side = 2 * radius + 1;
    let r = radius as i64;
    grid(side, |row, col| {
        let dr = row - r;
        let dc = col - r;
        dr * dr + dc * dc <= r * r
    })
}

pub(crate) fn diamond(radius: usize) -> Stencil {
    let side = 2 * radius + 1;
    let r = radius as i64;
    grid(side, |row, col| (row - r).abs() + (col - r).abs() <= r)
}

pub(crate) fn star(a: usize) -> Stencil {
    let m = 2 * a + 1;
    let n = a / 2;
    let side = m + 2 * n;
    let c = ((side - 1) / 2) as i64;
    let (lo, hi) = (n as i64, (n + m) as i64);
    grid(side, |row, col| {
        let in_square = (lo..hi).contains(&row) && (lo..hi).contains(&col);
        let in_diamond = (row - c).abs() + (col - c).abs() <= c;
        in_square || in_diamond
    })
}

fn grid(side: usize, occupied: impl Fn(i64, i64) -> bool) -> Stencil {
    let mut data = Vec::with_capacity(side * side);
    for row in 0..side as i64 {
        for col in 0..side as i64 {
            data.push(u8::from(occupied(row, col)));
        }
    }
    Stencil::from_raw(side, side, data)
}
