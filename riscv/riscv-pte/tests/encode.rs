use riscv_pte::{
    PTE_FLAG_R, PTE_FLAG_U, PTE_FLAG_V, PTE_FLAG_W, PageTableEntry, PhysicalAddress, PteError,
    PteMode, decode_flags, encode, encode_str, encode_text, parse_value,
};

#[test]
fn sv39_kernel_ram_entry() {
    let out = encode_text("sv39", "0x80000000", "URWV").unwrap();
    let mask = PTE_FLAG_U | PTE_FLAG_R | PTE_FLAG_W | PTE_FLAG_V;
    assert_eq!(out.flags.into_bits(), mask);
    assert_eq!(out.entry.page_number(), 0x8_0000);
    assert_eq!(out.entry.to_u64(), (0x8_0000 << 8) | u64::from(mask));
}

#[test]
fn sv32_single_valid_page() {
    let out = encode_text("sv32", "0x1000", "V").unwrap();
    assert_eq!(out.entry.to_u64(), (0x1 << 8) | u64::from(PTE_FLAG_V));
    assert!(matches!(out.entry, PageTableEntry::Sv32(_)));
}

#[test]
fn sv48_all_zero() {
    let out = encode_text("sv48", "0x0", "").unwrap();
    assert_eq!(out.flags.into_bits(), 0);
    assert_eq!(out.entry.to_u64(), 0);
}

#[test]
fn bad_literal_fails_before_anything_else() {
    let err = encode_text("sv39", "0xGG", "V").unwrap_err();
    assert!(matches!(err, PteError::Value(ref e) if e.input() == "0xGG"));
}

#[test]
fn invalid_inputs_fail_closed() {
    assert!(parse_value("0xZZ").is_err());
    assert!(decode_flags("Q").is_err());
    assert!(encode_str("sv64", 0x1000, decode_flags("V").unwrap()).is_err());
}

#[test]
fn encoding_is_deterministic() {
    let flags = decode_flags("DAXRV").unwrap();
    for mode in PteMode::ALL {
        let pa = PhysicalAddress::new(0x0000_0040_8765_4321);
        assert_eq!(encode(mode, pa, flags), encode(mode, pa, flags));
    }
}

#[test]
fn decimal_and_binary_addresses_agree_with_hex() {
    let hex = encode_text("sv39", "0x2000", "RV").unwrap();
    let dec = encode_text("sv39", "8192", "RV").unwrap();
    let bin = encode_text("sv39", "0b10000000000000", "VR").unwrap();
    assert_eq!(hex.entry, dec.entry);
    assert_eq!(hex.entry, bin.entry);
}

#[test]
fn field_extraction_recovers_inputs() {
    let addresses = [0, 0x1000, 0x8020_0042, 0x00FF_FFFF_F000, u64::MAX];
    for mode in PteMode::ALL {
        for &addr in &addresses {
            let flags = decode_flags("GUXWRV").unwrap();
            let e = encode_str(mode.name(), addr, flags).unwrap();
            assert_eq!(e.flags(), flags);
            assert_eq!(e.page_number(), (addr >> 12) & mode.ppn_mask());
            assert_eq!(e.to_u64() >> 8, e.page_number());
            if mode == PteMode::Sv32 {
                assert!(e.to_u64() <= u64::from(u32::MAX));
            }
        }
    }
}
