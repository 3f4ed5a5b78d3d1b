use meshmac_math::GfSymbol;

#[test]
fn test_commutative_exhaustive() {
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            assert_eq!(
                GfSymbol(a) * GfSymbol(b),
                GfSymbol(b) * GfSymbol(a),
                "mul({:02x},{:02x}) not commutative", a, b
            );
        }
    }
}

#[test]
fn test_identities() {
    for a in 0..=255u8 {
        assert_eq!(GfSymbol(a) * GfSymbol::ZERO, GfSymbol::ZERO);
        assert_eq!(GfSymbol(a) * GfSymbol::ONE, GfSymbol(a));
        // Addition is XOR: a + a = 0
        assert_eq!(GfSymbol(a) + GfSymbol(a), GfSymbol::ZERO);
    }
}

#[test]
fn test_reduction_known_vector() {
    // Doubling the top element wraps around through the polynomial.
    assert_eq!(GfSymbol(0x80) * GfSymbol(0x02), GfSymbol(0x1B));
    // AES xtime vectors
    assert_eq!(GfSymbol(0x02) * GfSymbol(0x03), GfSymbol(0x06));
    assert_eq!(GfSymbol(0x57) * GfSymbol(0x83), GfSymbol(0xC1));
}

#[test]
fn test_table_matches_bit_serial() {
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            let x = GfSymbol(a);
            let y = GfSymbol(b);
            assert_eq!(x * y, x.mul_slow(y));
        }
    }
}
