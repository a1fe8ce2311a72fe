/// Strips the `emulation_prevention_three_byte`s from a NAL-unit payload,
/// yielding the raw byte sequence payload (RBSP).
///
/// Per ISO/IEC 23008-2 - 7.4.2, a byte of value 3 that follows two
/// consecutive zero bytes is an escape inserted by the encoder and is
/// dropped. The zero-run count resets after each removal, so removals
/// never overlap.
pub fn unescape_rbsp(data: &[u8]) -> Vec<u8> {
    let mut rbsp = Vec::with_capacity(data.len());
    let mut zero_run = 0usize;

    for &byte in data {
        if zero_run >= 2 && byte == 3 {
            zero_run = 0;
            continue;
        }

        if byte == 0 {
            zero_run += 1;
        } else {
            zero_run = 0;
        }
        rbsp.push(byte);
    }

    rbsp
}

#[cfg(test)]
#[cfg_attr(all(test, coverage_nightly), coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_single_escape() {
        assert_eq!(unescape_rbsp(&[0x00, 0x00, 0x03, 0x00]), vec![0x00, 0x00, 0x00]);
        assert_eq!(unescape_rbsp(&[0x00, 0x00, 0x03, 0x01]), vec![0x00, 0x00, 0x01]);
    }

    #[test]
    fn test_longer_zero_run() {
        assert_eq!(
            unescape_rbsp(&[0x00, 0x00, 0x00, 0x03, 0x00]),
            vec![0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_sequential_escapes() {
        assert_eq!(
            unescape_rbsp(&[0x00, 0x00, 0x03, 0x00, 0x00, 0x03]),
            vec![0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_removals_do_not_stack() {
        // the second 3 is ordinary payload, the run was reset
        assert_eq!(unescape_rbsp(&[0x00, 0x00, 0x03, 0x03]), vec![0x00, 0x00, 0x03]);
    }

    #[test]
    fn test_three_without_zero_run_is_kept() {
        assert_eq!(unescape_rbsp(&[0x00, 0x03, 0x00, 0x03]), vec![0x00, 0x03, 0x00, 0x03]);
    }

    #[test]
    fn test_pattern_free_input_is_unchanged() {
        let data = [0x42, 0x01, 0x01, 0x01, 0x60, 0x00, 0x00, 0x90];
        assert_eq!(unescape_rbsp(&data), data.to_vec());
        assert_eq!(unescape_rbsp(&[]), Vec::<u8>::new());
    }
}
