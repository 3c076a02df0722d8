use proptest::prelude::*;
use securedigest::{
    digest, to_hex_string, ByteView, PasswordDigest, SecretString, Sha256, Sha512,
};

proptest! {
    #[test]
    fn hex_rendering_is_two_lowercase_digits_per_byte(
        data in proptest::collection::vec(any::<u8>(), 0..256)
    ) {
        let rendered = to_hex_string(ByteView::from(&data));

        prop_assert_eq!(rendered.len(), 2 * data.len());
        prop_assert!(rendered.bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f')));
        prop_assert_eq!(hex::decode(&rendered).unwrap(), data);
    }

    #[test]
    fn unsafe_make_copies_and_terminates(
        data in proptest::collection::vec(1..=u8::MAX, 0..128)
    ) {
        let secret = SecretString::unsafe_make(&data).unwrap();

        prop_assert_eq!(secret.len(), data.len());
        prop_assert_eq!(secret.as_bytes(), data.as_slice());
        prop_assert_eq!(secret.as_bytes_with_nul().last(), Some(&0u8));
    }

    #[test]
    fn clean_buffer_and_make_zeroes_the_source(
        data in proptest::collection::vec(any::<u8>(), 0..128)
    ) {
        let mut source = data.clone();
        let secret = SecretString::clean_buffer_and_make(&mut source).unwrap();

        prop_assert_eq!(secret.as_bytes(), data.as_slice());
        prop_assert_eq!(source.len(), data.len());
        prop_assert!(source.iter().all(|&b| b == 0));
    }

    #[test]
    fn concatenation_joins_content(
        lhs in proptest::collection::vec(any::<u8>(), 0..64),
        rhs in proptest::collection::vec(any::<u8>(), 0..64)
    ) {
        let left = SecretString::unsafe_make(&lhs).unwrap();
        let right = SecretString::unsafe_make(&rhs).unwrap();
        let joined = &left + &right;

        prop_assert_eq!(joined.len(), lhs.len() + rhs.len());
        prop_assert_eq!(&joined.as_bytes()[..lhs.len()], lhs.as_slice());
        prop_assert_eq!(&joined.as_bytes()[lhs.len()..], rhs.as_slice());
        prop_assert_eq!(left.as_bytes(), lhs.as_slice());
    }

    #[test]
    fn digest_matches_its_own_password(
        password in proptest::collection::vec(any::<u8>(), 0..128)
    ) {
        let secret = SecretString::unsafe_make(&password).unwrap();
        let sha256 = PasswordDigest::<Sha256>::new(&secret).unwrap();
        let sha512 = PasswordDigest::<Sha512>::new(&secret).unwrap();

        prop_assert!(sha256 == secret);
        prop_assert!(sha512 == secret);
        prop_assert_eq!(sha256.as_bytes(), &digest::<Sha256>(ByteView::from(&password)).unwrap()[..]);
    }

    #[test]
    fn truncated_hex_is_a_prefix(count in 0usize..80) {
        let secret = SecretString::unsafe_make("prefix").unwrap();
        let stored = PasswordDigest::<Sha512>::new(&secret).unwrap();
        let full = stored.to_hex_string();
        let truncated = stored.to_truncated_hex_string(count);

        prop_assert_eq!(truncated.len(), 2 * count.min(64));
        prop_assert!(full.starts_with(&truncated));
    }
}
