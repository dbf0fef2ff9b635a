//! Bitwise complement/shift over a fixed 16-bit table.

/// Initial table contents. Every slot is overwritten by the fixture.
pub const MEM: [u16; 8] = [0x0, 0x0258, 0x4abc, 0x7fff, 0x8000, 0x8100, 0xabcd, 0xffff];

/// Expected table contents after the shift pass.
pub const SH_ANS: [u32; 8] = [
    0x0000_fffd,
    0x0000_fff7,
    0x0000_ffdf,
    0x0000_ff7f,
    0x0000_fdff,
    0x0000_f7ff,
    0x0000_dfff,
    0x0000_7fff,
];

/// `!(1 << (2 * i + 1))` truncated to 16 bits.
#[must_use]
pub const fn shift_pattern(i: usize) -> u16 {
    let bit = 1u32 << (2 * i + 1);
    // truncate to 16 bits
    (!bit) as u16
}
