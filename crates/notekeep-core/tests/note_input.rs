//! Note payload validation.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use notekeep_core::error::ClientCode;
use notekeep_core::note::{parse_note_id, NoteInput};

#[test]
fn title_is_trimmed_and_required() {
    let ok: NoteInput = serde_json::from_str(r#"{"title":"  t1 ","content":"hello"}"#).unwrap();
    assert_eq!(ok.validate().unwrap().title, "t1");

    let blank: NoteInput = serde_json::from_str(r#"{"title":"   "}"#).unwrap();
    assert_eq!(blank.validate().unwrap_err().client_code(), ClientCode::BadRequest);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<NoteInput>(r#"{"title":"t","body":"x"}"#).is_err());
}

#[test]
fn note_ids_must_be_positive_integers() {
    assert_eq!(parse_note_id("7").unwrap(), 7);
    assert!(parse_note_id("0").is_err());
    assert!(parse_note_id("abc").is_err());
}
