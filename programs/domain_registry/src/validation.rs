// domain_registry/validation.rs

use crate::constants::{HYPHEN, MAX_DOMAIN_LENGTH, SEPARATOR};

/// Returns true if `candidate` is a registrable domain name.
///
/// A valid name is 1 to 253 ASCII bytes made of letters, digits and hyphens,
/// split by exactly one `.` separator. Neither the name nor either of its two
/// labels may start or end with a hyphen, so the separator can never be the
/// first or last byte. Hyphens inside a label are allowed (`my-site.com`).
pub fn is_valid_domain(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_DOMAIN_LENGTH {
        return false;
    }

    let last = bytes.len() - 1;
    let mut separator_seen = false;

    for (i, &byte) in bytes.iter().enumerate() {
        // First and last bytes of the name and of each label
        let at_boundary =
            i == 0 || i == last || bytes[i - 1] == SEPARATOR || bytes[i + 1] == SEPARATOR;
        if at_boundary && (byte == HYPHEN || byte == SEPARATOR) {
            return false;
        }

        match byte {
            SEPARATOR => {
                if separator_seen {
                    return false;
                }
                separator_seen = true;
            }
            b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | HYPHEN => {}
            _ => return false,
        }
    }

    separator_seen
}
