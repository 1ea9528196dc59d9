//! Property tests for raw input decoding.

use proptest::prelude::*;

use menutree::input::{decode, Command};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Three-byte reads depend only on their last byte and never
    /// produce a literal.
    #[test]
    fn property_three_byte_reads_use_last_byte(a in any::<u8>(), b in any::<u8>(), last in any::<u8>()) {
        let cmd = decode(&[a, b, last]);
        prop_assert_eq!(cmd, decode(&[0x1b, b'[', last]));
        prop_assert!(!matches!(cmd, Command::Literal(_) | Command::Empty));
    }

    /// PROPERTY: One- and two-byte reads depend only on their first byte.
    #[test]
    fn property_short_reads_use_first_byte(first in any::<u8>(), second in any::<u8>()) {
        prop_assert_eq!(decode(&[first, second]), decode(&[first]));
    }
}
