use super::*;

/// Tests loading a token file from disk.
///
/// Expected: Ok with the tokens in file order
#[test]
fn loads_tokens_from_file() {
    let file = TokenFile::with_contents("\n; Comment\ntoken1\ntoken2 ; inline\n token3\n\n").unwrap();

    let store = TokenStore::load(file.path()).unwrap();

    assert_eq!(
        store.iter().collect::<Vec<_>>(),
        vec!["token1", "token2", "token3"]
    );
}

/// Tests loading a file that does not exist.
///
/// Expected: Err(Read) naming the path
#[test]
fn fails_on_missing_file() {
    let file = TokenFile::missing().unwrap();

    let result = TokenStore::load(file.path());

    assert!(matches!(result, Err(TokenStoreError::Read { ref path, .. }) if path == file.path()));
}

/// Tests loading a file that holds no token.
///
/// Expected: Err(Empty)
#[test]
fn fails_on_empty_file() {
    for contents in ["", "\n\n", "; nothing here\n"] {
        let file = TokenFile::with_contents(contents).unwrap();

        let result = TokenStore::load(file.path());

        assert!(
            matches!(result, Err(TokenStoreError::Empty { .. })),
            "contents {:?}",
            contents
        );
    }
}
