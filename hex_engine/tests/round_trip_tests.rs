// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use hex_engine::{convert, read, resolve, write, Base, Config, FixedWidth, Warning};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SAMPLES: usize = 2000;

/// Edge values followed by seeded random values of every bit length.
fn sample_values() -> Vec<i64> {
    let mut values = vec![0, 1, -1, 2, -2, 26, 255, 256, i64::MAX, i64::MIN];
    let mut rng = StdRng::seed_from_u64(0x5eed_1e55);
    for _ in 0..SAMPLES {
        let bits = rng.random_range(1..=64u32);
        let value: u64 = rng.random();
        let value = (value >> (64 - bits)) as i64;
        values.push(value);
        values.push(value.wrapping_neg());
    }
    values
}

fn with_base(write_base: Base, signed: bool) -> Config {
    Config {
        write_base,
        signed,
        ..Config::default()
    }
}

/// Reads `text` the way the command line does: prefix removed first.
fn read_back(text: &str, config: &Config) -> i64 {
    let resolved = resolve(text, config);
    read(resolved.digits, resolved.base, config).value
}

#[test]
fn unsigned_power_of_two_round_trip() {
    for base in [Base::Binary, Base::Octal, Base::Hex] {
        let config = with_base(base, false);
        for value in sample_values() {
            let written = write(value, base, &config);
            assert!(written.warnings.is_empty());
            let resolved = resolve(&written.text, &config);
            assert_eq!(resolved.base, base, "{}", written.text);
            assert_eq!(
                read(resolved.digits, base, &config).value,
                value,
                "{}",
                written.text
            );
        }
    }
}

#[test]
fn signed_minimal_width_hex_round_trip() {
    let config = with_base(Base::Hex, true);
    for value in sample_values() {
        let written = write(value, Base::Hex, &config);
        assert!(written.warnings.is_empty());
        assert_eq!(read_back(&written.text, &config), value, "{}", written.text);
    }
}

#[test]
fn signed_minimal_width_binary_round_trip() {
    let config = with_base(Base::Binary, true);
    for value in sample_values() {
        let written = write(value, Base::Binary, &config);
        assert_eq!(read_back(&written.text, &config), value, "{}", written.text);
    }
}

#[test]
fn decimal_round_trip() {
    for signed in [false, true] {
        let config = with_base(Base::Decimal, signed);
        for value in sample_values() {
            let written = write(value, Base::Decimal, &config);
            let reading = read(&written.text, Base::Decimal, &config);
            assert!(reading.warnings.is_empty(), "{}", written.text);
            assert_eq!(reading.value, value, "{}", written.text);
        }
    }
}

#[test]
fn fixed_width_is_idempotent() {
    for bytes in FixedWidth::MIN_BYTES..=FixedWidth::MAX_BYTES {
        let fixed_width = FixedWidth::new(bytes);
        for signed in [false, true] {
            let config = Config {
                fixed_width,
                ..with_base(Base::Hex, signed)
            };
            for value in sample_values() {
                let written = write(value, Base::Hex, &config);
                if !written.warnings.is_empty() {
                    continue;
                }
                assert_eq!(written.text.len(), 2 + 2 * bytes as usize);
                assert_eq!(read_back(&written.text, &config), value, "{}", written.text);

                let rewritten = write(read_back(&written.text, &config), Base::Hex, &config);
                assert_eq!(rewritten.text, written.text);
            }
        }
    }
}

#[test]
fn fixed_width_warns_only_when_truncating() {
    let config = Config {
        fixed_width: FixedWidth::new(2),
        ..with_base(Base::Hex, false)
    };
    let conversion = convert("65536", &config);
    assert_eq!(conversion.text, "0x0000");
    assert_eq!(
        conversion.warnings,
        vec![Warning::FixedWidthLoss {
            required_bits: 17,
            width_bits: 16,
        }]
    );
    assert!(convert("65535", &config).warnings.is_empty());
}

#[test]
fn decimal_minimum_reads_without_warning() {
    let config = with_base(Base::Hex, true);
    for token in ["-9223372036854775808", "_9223372036854775808"] {
        let conversion = convert(token, &config);
        assert_eq!(conversion.value, i64::MIN);
        assert_eq!(conversion.text, "0x8000000000000000");
        assert!(conversion.warnings.is_empty());
    }
}

#[test]
fn decimal_signed_overflow_clears_sign_bit() {
    let config = with_base(Base::Decimal, true);
    let conversion = convert("9223372036854775808", &config);
    assert_eq!(conversion.value, 0);
    assert_eq!(conversion.warnings, vec![Warning::TwosComplementOverflow]);
}

#[test]
fn mode_resolution_scenarios() {
    let config = with_base(Base::Decimal, false);
    assert_eq!(convert("0x1A", &config).value, 26);
    assert_eq!(convert("0x1A", &config).read_base, Base::Hex);
    assert_eq!(convert("017", &config).value, 15);
    assert_eq!(convert("017", &config).read_base, Base::Octal);
    assert_eq!(convert("42", &config).value, 42);
    assert_eq!(convert("42", &config).read_base, Base::Decimal);
    assert_eq!(convert("0b101", &config).value, 5);
}

#[test]
fn formatting_scenarios() {
    assert_eq!(convert("26", &with_base(Base::Hex, false)).text, "0x1A");
    assert_eq!(
        convert(
            "-2",
            &Config {
                fixed_width: FixedWidth::new(1),
                ..with_base(Base::Binary, true)
            }
        )
        .text,
        "0b11111110"
    );
    assert_eq!(convert("5", &with_base(Base::Octal, false)).text, "05");
    assert_eq!(
        convert(
            "300",
            &Config {
                space_grouped_binary: true,
                ..with_base(Base::Binary, false)
            }
        )
        .text,
        "00000001 00101100"
    );
}

#[test]
fn warnings_are_collected_in_order() {
    let config = Config {
        fixed_width: FixedWidth::new(1),
        ..with_base(Base::Hex, false)
    };
    let conversion = convert("-300", &config);
    assert_eq!(conversion.text, "0x2C");
    assert_eq!(
        conversion.warnings,
        vec![
            Warning::NegativeInUnsignedMode,
            Warning::FixedWidthLoss {
                required_bits: 9,
                width_bits: 8,
            },
        ]
    );
}
