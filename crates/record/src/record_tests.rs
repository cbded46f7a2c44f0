use super::*;
use crate::FixedIdentity;
use chrono::TimeZone;

const USR_LINE: &[u8] =
    b"L3Vzcg==\t4096\t0\t0\t1609459200\t1609459200\t1609459200\tdir\t12345\t2\t1\n";

fn line_for(path: &str, uid: u32, gid: u32) -> Vec<u8> {
    format!(
        "{}\t10\t{uid}\t{gid}\t1\t2\t3\tf\t4\t1\t7\n",
        STANDARD.encode(path)
    )
    .into_bytes()
}

#[test]
fn decode_parses_every_column() {
    let rec = Record::decode(USR_LINE).expect("valid record");
    let new_year = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();

    assert_eq!(rec.encoded_path(), "L3Vzcg==");
    assert_eq!(rec.size, 4096);
    assert_eq!(rec.uid, 0);
    assert_eq!(rec.gid, 0);
    assert_eq!(rec.atime, new_year);
    assert_eq!(rec.mtime, new_year);
    assert_eq!(rec.ctime, new_year);
    assert_eq!(rec.mode, "dir");
    assert_eq!(rec.inode_id, 12345);
    assert_eq!(rec.hardlinks, 2);
    assert_eq!(rec.dev_id, 1);
}

#[test]
fn decode_accepts_any_line_terminator() {
    let bare = &USR_LINE[..USR_LINE.len() - 1];
    let mut crlf = bare.to_vec();
    crlf.extend_from_slice(b"\r\n");

    for line in [USR_LINE, bare, crlf.as_slice()] {
        let rec = Record::decode(line).expect("valid record");
        assert_eq!(rec.dev_id, 1, "line {:?}", String::from_utf8_lossy(line));
    }
}

#[test]
fn decode_leaves_the_path_encoded() {
    // Not base64 at all: decoding the record must still succeed.
    let line = b"not~base64\t1\t2\t3\t4\t5\t6\tf\t7\t8\t9\n";
    let rec = Record::decode(line).expect("path is not decoded eagerly");

    assert_eq!(rec.encoded_path(), "not~base64");
    assert!(matches!(rec.path(), Err(MalformedRecord::PathEncoding(_))));
}

#[test]
fn decode_rejects_wrong_field_counts() {
    let cases: &[(&[u8], usize)] = &[
        (b"", 1),
        (b"\n", 1),
        (b"L3Vzcg==\t4096\t0\t0\t1\t1\t1\tdir\t12345\t2\n", 10),
        (b"L3Vzcg==\t4096\t0\t0\t1\t1\t1\tdir\t12345\t2\t1\textra\n", 12),
        (b"L3Vzcg==\t4096\t0\t0\t1\t1\t1\tdir\t12345\t2\t1\t\n", 12),
    ];

    for (line, found) in cases {
        assert_eq!(
            Record::decode(line),
            Err(MalformedRecord::FieldCount { found: *found }),
            "line {:?}",
            String::from_utf8_lossy(line)
        );
    }
}

#[test]
fn decode_names_the_bad_numeric_field() {
    let cases: &[(&[u8], Field, &str)] = &[
        (b"eA==\tbig\t0\t0\t1\t1\t1\tf\t1\t1\t1", Field::Size, "big"),
        (b"eA==\t1\t-1\t0\t1\t1\t1\tf\t1\t1\t1", Field::Uid, "-1"),
        (b"eA==\t1\t0\t4294967296\t1\t1\t1\tf\t1\t1\t1", Field::Gid, "4294967296"),
        (b"eA==\t1\t0\t0\t1\t1\t1\tf\t\t1\t1", Field::InodeId, ""),
        (b"eA==\t1\t0\t0\t1\t1\t1\tf\t1\t1.5\t1", Field::Hardlinks, "1.5"),
        (b"eA==\t1\t0\t0\t1\t1\t1\tf\t1\t1\t0x1", Field::DevId, "0x1"),
    ];

    for (line, field, value) in cases {
        assert_eq!(
            Record::decode(line),
            Err(MalformedRecord::NotAnInteger {
                field: *field,
                value: value.to_string(),
            }),
        );
    }
}

#[test]
fn decode_rejects_bad_timestamps() {
    let cases: &[(&[u8], Field)] = &[
        (b"eA==\t1\t0\t0\tyesterday\t1\t1\tf\t1\t1\t1", Field::Atime),
        (b"eA==\t1\t0\t0\t1\t1.0\t1\tf\t1\t1\t1", Field::Mtime),
        (b"eA==\t1\t0\t0\t1\t1\t9223372036854775807\tf\t1\t1\t1", Field::Ctime),
    ];

    for (line, field) in cases {
        match Record::decode(line) {
            Err(MalformedRecord::BadTimestamp { field: got, .. }) => assert_eq!(got, *field),
            other => panic!("expected bad {field} timestamp, got {other:?}"),
        }
    }
}

#[test]
fn decode_accepts_pre_epoch_timestamps() {
    let rec = Record::decode(b"eA==\t1\t0\t0\t-86400\t0\t1\tf\t1\t1\t1").expect("valid");
    assert_eq!(rec.atime, Utc.with_ymd_and_hms(1969, 12, 31, 0, 0, 0).unwrap());
    assert_eq!(rec.mtime, DateTime::<Utc>::UNIX_EPOCH);
}

#[test]
fn decode_rejects_non_utf8_mode() {
    let line = b"eA==\t1\t0\t0\t1\t1\t1\t\xff\t1\t1\t1";
    assert_eq!(
        Record::decode(line),
        Err(MalformedRecord::NotUtf8 { field: Field::Mode })
    );
}

#[test]
fn path_decodes_on_demand() {
    let cases = ["/usr", "/", "/home/user/some file.txt", "/data/ünïcödé/ß"];

    for path in cases {
        let line = line_for(path, 1, 1);
        let rec = Record::decode(&line).expect("valid record");
        assert_eq!(rec.path().expect("decodable"), PathBuf::from(path));
    }
}

#[test]
fn path_must_be_utf8() {
    let encoded = STANDARD.encode(b"/tmp/\xff\xfe");
    let line = format!("{encoded}\t1\t0\t0\t1\t1\t1\tf\t1\t1\t1");
    let rec = Record::decode(line.as_bytes()).expect("valid record");

    assert_eq!(rec.path(), Err(MalformedRecord::PathNotUtf8));
}

#[test]
fn owner_names_come_from_uid_and_gid() {
    let ids = FixedIdentity::new()
        .with_user(1000, "alice")
        .with_user(2000, "bob")
        .with_group(1000, "alice-grp")
        .with_group(2000, "staff");

    let line = line_for("/x", 1000, 2000);
    let rec = Record::decode(&line).expect("valid record");

    assert_eq!(rec.user(&ids).as_deref(), Ok("alice"));
    assert_eq!(rec.group(&ids).as_deref(), Ok("staff"));
}

#[test]
fn unknown_owner_ids_surface_lazily() {
    let ids = FixedIdentity::new();
    let line = line_for("/x", 42, 43);

    let rec = Record::decode(&line).expect("unknown ids do not affect decoding");
    assert_eq!(rec.user(&ids), Err(NoSuchIdentity::User(42)));
    assert_eq!(rec.group(&ids), Err(NoSuchIdentity::Group(43)));
}
