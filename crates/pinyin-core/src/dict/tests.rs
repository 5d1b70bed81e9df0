use std::io::Write;

use crate::dict::{CharDictionary, DictError, Dictionary};

const SAMPLE: &str = ",中zhōng,国guó,欧ōu,阳yáng,锋fēng,";

#[test]
fn test_lookup_exact() {
    let dict = CharDictionary::parse(SAMPLE);
    assert_eq!(dict.lookup('中'), Some("zhōng"));
    assert_eq!(dict.lookup('国'), Some("guó"));
    assert_eq!(dict.len(), 5);
}

#[test]
fn test_lookup_missing() {
    let dict = CharDictionary::parse(SAMPLE);
    assert_eq!(dict.lookup('字'), None);
    assert_eq!(dict.lookup('a'), None);
    assert_eq!(dict.lookup(','), None);
}

#[test]
fn test_first_record_wins() {
    let dict = CharDictionary::parse(",行xíng,行háng,");
    assert_eq!(dict.lookup('行'), Some("xíng"));
    assert_eq!(dict.len(), 1);
}

#[test]
fn test_reading_keeps_spaces() {
    let dict = CharDictionary::parse(",重zhòng chóng,");
    assert_eq!(dict.lookup('重'), Some("zhòng chóng"));
}

#[test]
fn test_empty_reading_is_a_match() {
    let dict = CharDictionary::parse(",中,国guó,");
    assert_eq!(dict.lookup('中'), Some(""));
}

#[test]
fn test_unterminated_records_ignored() {
    // Neither the leading piece nor the trailing piece is closed by commas.
    let dict = CharDictionary::parse("中zhōng,国guó,人rén");
    assert_eq!(dict.lookup('中'), None);
    assert_eq!(dict.lookup('国'), Some("guó"));
    assert_eq!(dict.lookup('人'), None);
}

#[test]
fn test_record_with_line_break_skipped() {
    let dict = CharDictionary::parse(",中zhōng\n,中zhòng,");
    assert_eq!(dict.lookup('中'), Some("zhòng"));
}

#[test]
fn test_non_hanzi_keys_not_indexed() {
    let dict = CharDictionary::parse(",aei,あa,中zhōng,");
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.lookup('a'), None);
    assert_eq!(dict.lookup('あ'), None);
}

#[test]
fn test_empty_blob() {
    let dict = CharDictionary::from_bytes(b"").unwrap();
    assert!(dict.is_empty());
    assert_eq!(dict.lookup('中'), None);
}

#[test]
fn test_invalid_utf8() {
    let err = CharDictionary::from_bytes(&[b',', 0xE4, 0xB8, b',']).err().unwrap();
    assert!(matches!(err, DictError::Load(_)));
}

#[test]
fn test_from_entries() {
    let dict = CharDictionary::from_entries(vec![
        ('中', "zhōng".to_string()),
        ('中', "zhòng".to_string()),
        ('x', "ignored".to_string()),
    ]);
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.lookup('中'), Some("zhōng"));
}

#[test]
fn test_entries_sorted() {
    let dict = CharDictionary::parse(SAMPLE);
    let entries = dict.entries();
    assert_eq!(entries.len(), 5);
    assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
    assert!(entries.contains(&('锋', "fēng")));
}

#[test]
fn test_open_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    file.flush().unwrap();

    let dict = CharDictionary::open(file.path()).unwrap();
    assert_eq!(dict.lookup('阳'), Some("yáng"));
}

#[test]
fn test_open_empty_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let dict = CharDictionary::open(file.path()).unwrap();
    assert!(dict.is_empty());
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = CharDictionary::open(&dir.path().join("missing.dat"))
        .err()
        .unwrap();
    assert!(matches!(err, DictError::Io(_)));
}
