use crate::store::sqlite3::like_pattern;

#[test]
fn test_plain_text() {
    assert_eq!(like_pattern("ada"), "%ada%");
    assert_eq!(like_pattern(""), "%%");
}

#[test]
fn test_metacharacters_escaped() {
    assert_eq!(like_pattern("50%"), "%50\\%%");
    assert_eq!(like_pattern("a_b"), "%a\\_b%");
    assert_eq!(like_pattern("c:\\tmp"), "%c:\\\\tmp%");
}
