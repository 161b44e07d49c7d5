//! Built-in conformance cases for the number formatter.
//!
//! The target contract: parse an unsigned 32-bit decimal integer from its
//! single argument and print it as big-endian and little-endian hex byte
//! sequences, exiting 0; exit -1 with empty stdout for anything that is not
//! a pure digit sequence in range. Sign prefixes are rejected, `+` included.

/// One black-box case: input token, expected exit code, expected stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    /// Token passed as the target's single command-line argument.
    pub input: &'static str,
    /// Expected exit code, as a signed 32-bit value.
    pub expected_exit_code: i32,
    /// Expected stdout, compared byte-for-byte.
    pub expected_stdout: &'static str,
}

/// The fixed case table, run in order.
pub const CASES: &[TestCase] = &[
    // Random number within range (1)
    TestCase {
        input: "32000000",
        expected_exit_code: 0,
        expected_stdout: "Big Endian: 01 E8 48 00\nLittle Endian: 00 48 E8 01\n",
    },
    // Random number within range (2)
    TestCase {
        input: "2000000000",
        expected_exit_code: 0,
        expected_stdout: "Big Endian: 77 35 94 00\nLittle Endian: 00 94 35 77\n",
    },
    // Random number within range (3)
    TestCase {
        input: "4000000000",
        expected_exit_code: 0,
        expected_stdout: "Big Endian: EE 6B 28 00\nLittle Endian: 00 28 6B EE\n",
    },
    // Max boundary
    TestCase {
        input: "4294967295",
        expected_exit_code: 0,
        expected_stdout: "Big Endian: FF FF FF FF\nLittle Endian: FF FF FF FF\n",
    },
    // Min boundary
    TestCase {
        input: "0",
        expected_exit_code: 0,
        expected_stdout: "Big Endian: 00 00 00 00\nLittle Endian: 00 00 00 00\n",
    },
    // Exactly half range
    TestCase {
        input: "2147483648",
        expected_exit_code: 0,
        expected_stdout: "Big Endian: 80 00 00 00\nLittle Endian: 00 00 00 80\n",
    },
    // ASCII characters
    TestCase {
        input: "StringTest",
        expected_exit_code: -1,
        expected_stdout: "",
    },
    // Out of range (negative)
    TestCase {
        input: "-1",
        expected_exit_code: -1,
        expected_stdout: "",
    },
    // Out of range (bigger than max)
    TestCase {
        input: "4294967296",
        expected_exit_code: -1,
        expected_stdout: "",
    },
    // Characters from the extended ASCII table
    TestCase {
        input: "åçêë",
        expected_exit_code: -1,
        expected_stdout: "",
    },
    // First valid below max boundary
    TestCase {
        input: "4294967294",
        expected_exit_code: 0,
        expected_stdout: "Big Endian: FF FF FF FE\nLittle Endian: FE FF FF FF\n",
    },
    // First valid above min boundary
    TestCase {
        input: "1",
        expected_exit_code: 0,
        expected_stdout: "Big Endian: 00 00 00 01\nLittle Endian: 01 00 00 00\n",
    },
    // Positive number with '+' sign in front
    TestCase {
        input: "+1",
        expected_exit_code: -1,
        expected_stdout: "",
    },
    // Random math symbols
    TestCase {
        input: "/*-+",
        expected_exit_code: -1,
        expected_stdout: "",
    },
    // Floating point with dot
    TestCase {
        input: "1.0",
        expected_exit_code: -1,
        expected_stdout: "",
    },
    // Floating point with comma
    TestCase {
        input: "1,0",
        expected_exit_code: -1,
        expected_stdout: "",
    },
];

/// Renders the two hex-dump lines a conforming target prints for `value`.
pub fn expected_success_stdout(value: u32) -> String {
    let b = value.to_be_bytes();
    format!(
        "Big Endian: {:02X} {:02X} {:02X} {:02X}\nLittle Endian: {:02X} {:02X} {:02X} {:02X}\n",
        b[0], b[1], b[2], b[3], b[3], b[2], b[1], b[0]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_sixteen_cases() {
        assert_eq!(CASES.len(), 16);
    }

    #[test]
    fn accepted_cases_match_rendered_stdout() {
        for case in CASES.iter().filter(|c| c.expected_exit_code == 0) {
            let value: u32 = case
                .input
                .parse()
                .unwrap_or_else(|_| panic!("accepted input '{}' must parse", case.input));
            assert_eq!(
                case.expected_stdout,
                expected_success_stdout(value),
                "stdout mismatch for input '{}'",
                case.input
            );
        }
    }

    #[test]
    fn rejected_cases_expect_empty_stdout() {
        for case in CASES.iter().filter(|c| c.expected_exit_code != 0) {
            assert_eq!(case.expected_exit_code, -1);
            assert!(case.expected_stdout.is_empty());
        }
    }

    #[test]
    fn rejected_inputs_are_not_plain_digit_sequences_in_range() {
        for case in CASES.iter().filter(|c| c.expected_exit_code == -1) {
            let in_range = case.input.chars().all(|c| c.is_ascii_digit())
                && case.input.parse::<u32>().is_ok();
            assert!(!in_range, "input '{}' should not be accepted", case.input);
        }
    }

    #[test]
    fn boundaries_render_expected_bytes() {
        assert_eq!(
            expected_success_stdout(0),
            "Big Endian: 00 00 00 00\nLittle Endian: 00 00 00 00\n"
        );
        assert_eq!(
            expected_success_stdout(u32::MAX),
            "Big Endian: FF FF FF FF\nLittle Endian: FF FF FF FF\n"
        );
        assert_eq!(
            expected_success_stdout(1 << 31),
            "Big Endian: 80 00 00 00\nLittle Endian: 00 00 00 80\n"
        );
        assert_eq!(
            expected_success_stdout(1),
            "Big Endian: 00 00 00 01\nLittle Endian: 01 00 00 00\n"
        );
    }

    #[test]
    fn sign_prefix_is_rejected_even_for_valid_magnitude() {
        let plus_one = CASES.iter().find(|c| c.input == "+1").unwrap();
        assert_eq!(plus_one.expected_exit_code, -1);

        let bare_one = CASES.iter().find(|c| c.input == "1").unwrap();
        assert_eq!(bare_one.expected_exit_code, 0);
    }
}
