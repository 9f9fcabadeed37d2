//! Reading instances from whitespace-separated integer files.

use std::path::Path;

use tracing::debug;

use super::types::Instance;
use crate::error::{PartitionError, Result};

/// Reads the first `expected` integers of `path` into an [`Instance`].
///
/// Integers are consumed in order until `expected` have been read or a
/// malformed token is reached. A token with a numeric prefix such as
/// `12abc` yields `12` and ends the read. Bytes after the
/// `expected`-th integer are never inspected, so they need not be text.
///
/// # Errors
///
/// - [`PartitionError::FileOpen`] if the file cannot be read.
/// - [`PartitionError::ShortInput`] if fewer than `expected` integers
///   precede the end of the file or the first malformed token.
/// - [`PartitionError::EmptyInstance`] if `expected` is zero.
pub fn read_instance(path: impl AsRef<Path>, expected: usize) -> Result<Instance> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| PartitionError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let values = take_integers(&bytes, expected);
    if values.len() < expected {
        return Err(PartitionError::ShortInput {
            path: path.to_path_buf(),
            read: values.len(),
            expected,
        });
    }

    debug!(path = %path.display(), count = values.len(), "instance loaded");
    Instance::new(values)
}

/// Leading integers of `bytes`, at most `limit` of them.
fn take_integers(bytes: &[u8], limit: usize) -> Vec<i64> {
    let mut values = Vec::with_capacity(limit);
    let tokens = bytes
        .split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty());

    for token in tokens {
        // A token may hold several adjacent integers, e.g. `12-5`.
        let mut rest = token;
        while !rest.is_empty() {
            if values.len() == limit {
                return values;
            }
            match leading_integer(rest) {
                Some((value, len)) => {
                    values.push(value);
                    rest = &rest[len..];
                }
                None => return values,
            }
        }
    }
    values
}

/// Optionally signed decimal prefix of `token` and its length in bytes.
fn leading_integer(token: &[u8]) -> Option<(i64, usize)> {
    let sign = usize::from(matches!(token.first(), Some(b'+' | b'-')));
    let digits = token[sign..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }

    let len = sign + digits;
    let text = std::str::from_utf8(&token[..len]).ok()?;
    text.parse().ok().map(|value| (value, len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_take_integers_stops_at_limit() {
        assert_eq!(take_integers(b"1 2 3 4 5", 3), vec![1, 2, 3]);
    }

    #[test]
    fn test_take_integers_stops_at_bad_token() {
        assert_eq!(take_integers(b"7\n-8\nx 9", 10), vec![7, -8]);
    }

    #[test]
    fn test_take_integers_mixed_whitespace() {
        assert_eq!(take_integers(b"  1\t2\r\n3  ", 3), vec![1, 2, 3]);
    }

    #[test]
    fn test_take_integers_numeric_prefix() {
        assert_eq!(take_integers(b"4 12abc 9", 10), vec![4, 12]);
        assert_eq!(take_integers(b"12-5 +3", 10), vec![12, -5, 3]);
        assert_eq!(take_integers(b"- 1", 10), Vec::<i64>::new());
    }

    #[test]
    fn test_take_integers_overflow_stops() {
        assert_eq!(take_integers(b"1 99999999999999999999 2", 10), vec![1]);
    }

    #[test]
    fn test_read_instance_ignores_trailing_non_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"1 2 3 4\n\xff\xfe garbage").unwrap();

        let instance = read_instance(file.path(), 4).unwrap();
        assert_eq!(instance.values(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_read_instance_non_utf8_before_limit_is_short() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"1 2 \xff 4").unwrap();

        assert!(matches!(
            read_instance(file.path(), 4),
            Err(PartitionError::ShortInput { read: 2, .. })
        ));
    }

    #[test]
    fn test_read_instance_ok() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "10\n8\n7\n6\n5\n99").unwrap();

        let instance = read_instance(file.path(), 5).unwrap();
        assert_eq!(instance.values(), &[10, 8, 7, 6, 5]);
    }

    #[test]
    fn test_read_instance_short() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 2 3").unwrap();

        match read_instance(file.path(), 5) {
            Err(PartitionError::ShortInput { read, expected, .. }) => {
                assert_eq!(read, 3);
                assert_eq!(expected, 5);
            }
            other => panic!("expected ShortInput, got {other:?}"),
        }
    }

    #[test]
    fn test_read_instance_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(matches!(
            read_instance(&missing, 5),
            Err(PartitionError::FileOpen { .. })
        ));
    }
}
