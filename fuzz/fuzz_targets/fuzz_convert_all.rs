#![no_main]

use baseconv::{Base, ConversionResult, convert_all, parse_to_decimal};
use libfuzzer_sys::fuzz_target;

const BASES: [Base; 5] = [Base::Auto, Base::Decimal, Base::Binary, Base::Octal, Base::Hex];

fuzz_target!(|input: (u8, &str)| {
    let (selector, data) = input;
    let base = BASES[selector as usize % BASES.len()];

    if let Ok((result, detected)) = convert_all(data, base) {
        let value = parse_to_decimal(data, detected.or_decimal()).expect("accepted input reparses");
        assert_eq!(result, ConversionResult::from_value(value));
    }
});
