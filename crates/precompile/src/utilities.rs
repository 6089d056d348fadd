//! Input normalization helpers.
use std::borrow::Cow;

/// Right-pads the given slice with zeroes until `LEN`.
///
/// Returns the first `LEN` bytes if it does not need padding.
#[inline]
pub fn right_pad<const LEN: usize>(data: &[u8]) -> Cow<'_, [u8; LEN]> {
    if let Some(data) = data.first_chunk::<LEN>() {
        Cow::Borrowed(data)
    } else {
        let mut padded = [0; LEN];
        padded[..data.len()].copy_from_slice(data);
        Cow::Owned(padded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_with_right_padding() {
        let data = [1, 2, 3, 4];
        let padded = right_pad::<8>(&data);
        assert!(matches!(padded, Cow::Owned(_)));
        assert_eq!(padded[..], [1, 2, 3, 4, 0, 0, 0, 0]);

        let padded = right_pad::<8>(&[]);
        assert!(matches!(padded, Cow::Owned(_)));
        assert_eq!(padded[..], [0; 8]);
    }

    #[test]
    fn right_padding_truncates() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8];
        let padded = right_pad::<8>(&data);
        assert!(matches!(padded, Cow::Borrowed(_)));
        assert_eq!(padded[..], data);

        let padded = right_pad::<4>(&data);
        assert!(matches!(padded, Cow::Borrowed(_)));
        assert_eq!(padded[..], [1, 2, 3, 4]);
    }
}
