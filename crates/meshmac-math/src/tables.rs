/// Low byte of the Rijndael polynomial x^8 + x^4 + x^3 + x + 1 (0x11B).
/// XORed in whenever a left shift carries out of the top bit.
const REDUCE: u8 = 0x1B;

pub struct GfProducts {
    pub table: [[u8; 256]; 256],
}

/// Carry-less multiply-and-reduce ("peasant's algorithm") over GF(2^8).
/// Reference implementation; runtime multiplication goes through PRODUCTS.
pub const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            p ^= a;
        }
        let hi_bit_set = a & 0x80 != 0;
        a <<= 1;
        if hi_bit_set {
            a ^= REDUCE;
        }
        b >>= 1;
        i += 1;
    }
    p
}

/// Generates the full 256x256 product table at compile time by running
/// gmul over every pair.
const fn gen_products() -> GfProducts {
    let mut table = [[0u8; 256]; 256];
    let mut a = 0;
    while a < 256 {
        let mut b = 0;
        while b < 256 {
            table[a][b] = gmul(a as u8, b as u8);
            b += 1;
        }
        a += 1;
    }
    GfProducts { table }
}

/// The compile-time generated product table. Lives in .rodata, so concurrent
/// readers never need synchronization.
// 64K gmul evaluations; let const eval run to completion.
#[allow(long_running_const_eval)]
pub static PRODUCTS: GfProducts = gen_products();
